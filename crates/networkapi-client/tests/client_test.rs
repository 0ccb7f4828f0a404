//! Behavior tests for the NetworkAPI client against a local HTTP double
//!
//! These cover the wire-level contract: bulk paths join ids with `;`,
//! payload lists travel under their resource-name key, filters are forwarded
//! unchanged, and malformed identifiers never reach the network.

use networkapi_client::{NetworkApiClient, NetworkApiError};
use serde_json::json;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> NetworkApiClient {
    NetworkApiClient::new(
        server.uri(),
        "admin".to_string(),
        "password".to_string(),
        None,
    )
    .expect("failed to create client")
}

#[tokio::test]
async fn get_ipv6s_joins_ids_with_semicolon() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/ipv6/1;2;3/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ipv6s": [
                {"id": 1, "ip_formated": "fdbe::1"},
                {"id": 2, "ip_formated": "fdbe::2"},
                {"id": 3, "ip_formated": "fdbe::3"},
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ipv6s = client.get_ipv6s(&[1, 2, 3], &[]).await.expect("get failed");

    assert_eq!(ipv6s.len(), 3);
    assert_eq!(ipv6s[0].ip_formated.as_deref(), Some("fdbe::1"));
}

#[tokio::test]
async fn delete_ipv6s_joins_ids_with_semicolon() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v3/ipv6/10;20/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.delete_ipv6s(&[10, 20]).await.expect("delete failed");
}

#[tokio::test]
async fn create_ipv6s_wraps_payloads_under_documented_key() {
    let server = MockServer::start().await;

    let payloads = vec![
        json!({"networkipv6": 7, "description": "first"}),
        json!({"networkipv6": 7, "description": "second"}),
    ];

    Mock::given(method("POST"))
        .and(path("/api/v3/ipv6/"))
        .and(body_json(json!({ "ipv6s": payloads.clone() })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!([{"id": 100}, {"id": 101}])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ids = client.create_ipv6s(&payloads).await.expect("create failed");

    assert_eq!(ids, vec![100, 101]);
}

#[tokio::test]
async fn update_ipv6s_puts_to_joined_ids_path() {
    let server = MockServer::start().await;

    let payloads = vec![
        json!({"id": 5, "description": "changed"}),
        json!({"id": 9, "description": "also changed"}),
    ];

    Mock::given(method("PUT"))
        .and(path("/api/v3/ipv6/5;9/"))
        .and(body_json(json!({ "ipv6s": payloads.clone() })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.update_ipv6s(&payloads).await.expect("update failed");
}

#[tokio::test]
async fn search_forwards_filters_into_query_string() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/ipv6/"))
        .and(query_param("kind", "basic"))
        .and(query_param("include", "description"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ipv6s": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ipv6s = client
        .search_ipv6s(&[("kind", "basic"), ("include", "description")])
        .await
        .expect("search failed");

    assert!(ipv6s.is_empty());
}

#[tokio::test]
async fn malformed_ids_fail_without_any_http_call() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let empty = client.delete_ipv6s(&[]).await.unwrap_err();
    assert!(matches!(empty, NetworkApiError::InvalidParameter(_)));

    let zero = client.get_ipv6s(&[0], &[]).await.unwrap_err();
    assert!(matches!(zero, NetworkApiError::InvalidParameter(_)));

    let no_id = client
        .update_ipv6s(&[json!({"description": "missing id"})])
        .await
        .unwrap_err();
    assert!(matches!(no_id, NetworkApiError::InvalidParameter(_)));

    let bad_brand = client.delete_brand(0).await.unwrap_err();
    assert!(matches!(bad_brand, NetworkApiError::InvalidParameter(_)));

    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty(), "no request should have been sent");
}

#[tokio::test]
async fn list_brands_unwraps_brand_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/brand/all/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "brand": [
                {"id": 1, "name": "Cisco"},
                {"id": 2, "name": "Juniper"},
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let brands = client.list_brands().await.expect("list failed");

    assert_eq!(brands.len(), 2);
    assert_eq!(brands[1].name, "Juniper");
}

#[tokio::test]
async fn create_brand_returns_created_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/brand/"))
        .and(body_json(json!({"brand": {"name": "Cisco"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"brand": {"id": 77}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let id = client.create_brand("Cisco").await.expect("create failed");

    assert_eq!(id, 77);
}

#[tokio::test]
async fn rename_brand_puts_to_id_path() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/brand/7/"))
        .and(body_json(json!({"brand": {"name": "Cisco Systems"}})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .rename_brand(7, "Cisco Systems")
        .await
        .expect("rename failed");
}

#[tokio::test]
async fn legacy_error_codes_map_to_typed_variants() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/brand/"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "code": 250,
            "description": "brand name already registered"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.create_brand("Cisco").await.unwrap_err();

    assert!(matches!(err, NetworkApiError::DuplicateName(_)));
}

#[tokio::test]
async fn database_failure_maps_to_database_variant() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/brand/3/"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "code": 1,
            "description": "failed to access the database"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.delete_brand(3).await.unwrap_err();

    assert!(matches!(err, NetworkApiError::Database(_)));
}

#[tokio::test]
async fn missing_resource_maps_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/brand/42/"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get_brand(42).await.unwrap_err();

    assert!(matches!(err, NetworkApiError::NotFound(_)));
}

#[tokio::test]
async fn bad_credentials_map_to_authentication() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/brand/all/"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.list_brands().await.unwrap_err();

    assert!(matches!(err, NetworkApiError::Authentication(_)));
}

#[tokio::test]
async fn requests_carry_basic_auth_and_optional_ldap_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/brand/all/"))
        .and(header_exists("authorization"))
        .and(header("NETWORKAPI_USERLDAP", "ldap-admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "brand": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = NetworkApiClient::new(
        server.uri(),
        "admin".to_string(),
        "password".to_string(),
        Some("ldap-admin".to_string()),
    )
    .expect("failed to create client");

    client.list_brands().await.expect("list failed");
}
