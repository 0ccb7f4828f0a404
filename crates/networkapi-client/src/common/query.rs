//! Generic resource operations
//!
//! One abstraction parameterized by endpoint and wrap key replaces
//! per-resource request plumbing. Each function maps to one HTTP verb
//! against `{endpoint}` or `{endpoint}{ids}/` and unwraps the documented
//! response key.

use crate::common::{HttpClient, ids, unwrap_list};
use crate::error::NetworkApiError;
use crate::models::CreatedId;
use serde::de::DeserializeOwned;

/// Search resources, forwarding all filters unchanged into the query string
pub async fn search_resources<T: DeserializeOwned>(
    http: &HttpClient,
    endpoint: &str,
    key: &str,
    filters: &[(&str, &str)],
) -> Result<Vec<T>, NetworkApiError> {
    let path = if filters.is_empty() {
        endpoint.to_string()
    } else {
        format!("{}?{}", endpoint, http.build_query_string(filters))
    };

    let body: serde_json::Value = http.get(&path).await?;
    unwrap_list(body, key)
}

/// Get resources by id, optionally narrowing the response with filters
pub async fn get_resources<T: DeserializeOwned>(
    http: &HttpClient,
    endpoint: &str,
    key: &str,
    ids: &[u64],
    filters: &[(&str, &str)],
) -> Result<Vec<T>, NetworkApiError> {
    let mut path = ids::path_with_ids(endpoint, ids)?;
    if !filters.is_empty() {
        path = format!("{}?{}", path, http.build_query_string(filters));
    }

    let body: serde_json::Value = http.get(&path).await?;
    unwrap_list(body, key)
}

/// Create resources, wrapping the payloads under the documented key
///
/// Returns the identifiers of the created records.
pub async fn create_resources(
    http: &HttpClient,
    endpoint: &str,
    key: &str,
    payloads: &[serde_json::Value],
) -> Result<Vec<u64>, NetworkApiError> {
    if payloads.is_empty() {
        return Err(NetworkApiError::InvalidParameter(
            "at least one payload is required".to_string(),
        ));
    }

    let body = wrap_payloads(key, payloads);
    let created: Vec<CreatedId> = http.post(endpoint, &body).await?;
    Ok(created.iter().map(|c| c.id).collect())
}

/// Update resources in place
///
/// Ids are read from each payload's `"id"` field and joined into the path;
/// the payloads themselves travel wrapped under the documented key.
pub async fn update_resources(
    http: &HttpClient,
    endpoint: &str,
    key: &str,
    payloads: &[serde_json::Value],
) -> Result<(), NetworkApiError> {
    if payloads.is_empty() {
        return Err(NetworkApiError::InvalidParameter(
            "at least one payload is required".to_string(),
        ));
    }

    let mut resource_ids = Vec::with_capacity(payloads.len());
    for payload in payloads {
        resource_ids.push(ids::id_from_payload(payload)?);
    }

    let path = ids::path_with_ids(endpoint, &resource_ids)?;
    let body = wrap_payloads(key, payloads);
    http.put(&path, &body).await
}

/// Wrap a payload list under its resource-name key, e.g. `{"ipv6s": [...]}`
fn wrap_payloads(key: &str, payloads: &[serde_json::Value]) -> serde_json::Value {
    let mut object = serde_json::Map::new();
    object.insert(
        key.to_string(),
        serde_json::Value::Array(payloads.to_vec()),
    );
    serde_json::Value::Object(object)
}

/// Delete resources by id
pub async fn delete_resources(
    http: &HttpClient,
    endpoint: &str,
    ids_to_delete: &[u64],
) -> Result<(), NetworkApiError> {
    let path = ids::path_with_ids(endpoint, ids_to_delete)?;
    http.delete(&path).await
}
