//! Common utilities for the NetworkAPI client
//!
//! Provides the authenticated submission wrapper shared by every resource
//! operation, plus response-key unwrapping.

pub mod ids;
pub mod query;

use crate::error::{NetworkApiError, from_legacy_code};
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Legacy failure body shape: `{"code": n, "description": s}`
#[derive(Debug, Deserialize)]
struct LegacyFailure {
    code: u32,
    description: String,
}

/// HTTP submission wrapper with authentication
///
/// Every resource method funnels through here: one request, one response,
/// no retries.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    username: String,
    password: String,
    ldap_user: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP submission wrapper
    pub fn new(
        client: Client,
        base_url: String,
        username: String,
        password: String,
        ldap_user: Option<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            username,
            password,
            ldap_user,
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL from a relative path
    pub fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authenticated(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let builder = builder
            .basic_auth(&self.username, Some(&self.password))
            .header("Accept", "application/json");
        match &self.ldap_user {
            Some(ldap) => builder.header("NETWORKAPI_USERLDAP", ldap),
            None => builder,
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, NetworkApiError> {
        let url = self.build_url(path);
        debug!("GET {}", url);

        let response = self
            .authenticated(self.client.get(&url))
            .send()
            .await
            .map_err(NetworkApiError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(decode_failure("GET", path, status, &body));
        }

        response.json().await.map_err(NetworkApiError::Http)
    }

    /// Make a POST request
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, NetworkApiError> {
        let url = self.build_url(path);
        debug!("POST {} with body: {}", url, body);

        let response = self
            .authenticated(self.client.post(&url))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(NetworkApiError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(decode_failure("POST", path, status, &body_text));
        }

        response.json().await.map_err(NetworkApiError::Http)
    }

    /// Make a PUT request, discarding any response body
    pub async fn put(&self, path: &str, body: &serde_json::Value) -> Result<(), NetworkApiError> {
        let url = self.build_url(path);
        debug!("PUT {} with body: {}", url, body);

        let response = self
            .authenticated(self.client.put(&url))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(NetworkApiError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(decode_failure("PUT", path, status, &body_text));
        }

        Ok(())
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<(), NetworkApiError> {
        let url = self.build_url(path);
        debug!("DELETE {}", url);

        let response = self
            .authenticated(self.client.delete(&url))
            .send()
            .await
            .map_err(NetworkApiError::Http)?;

        let status = response.status();
        if !status.is_success() && status != 204 {
            let body = response.text().await.unwrap_or_default();
            return Err(decode_failure("DELETE", path, status, &body));
        }

        Ok(())
    }

    /// Build a query string from filters, URL-encoding keys and values
    pub fn build_query_string(&self, filters: &[(&str, &str)]) -> String {
        if filters.is_empty() {
            String::new()
        } else {
            filters
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&")
        }
    }
}

/// Decode a non-success response into a typed error
///
/// 401/403 and 404 map directly. Bodies carrying the legacy
/// `{"code", "description"}` shape map through the server error table.
fn decode_failure(
    verb: &str,
    path: &str,
    status: reqwest::StatusCode,
    body: &str,
) -> NetworkApiError {
    if status == 401 || status == 403 {
        return NetworkApiError::Authentication(format!("{verb} {path}: {status} - {body}"));
    }

    if let Ok(failure) = serde_json::from_str::<LegacyFailure>(body) {
        return from_legacy_code(failure.code, failure.description);
    }

    if status == 404 {
        return NetworkApiError::NotFound(format!("{verb} {path}: {body}"));
    }

    NetworkApiError::Api(format!("{verb} {path} failed: {status} - {body}"))
}

/// Unwrap a list of resources from under its documented response key
///
/// NetworkAPI wraps payloads under a resource-name key, e.g.
/// `{"ipv6s": [...]}` or `{"brand": [...]}`.
pub fn unwrap_list<T: DeserializeOwned>(
    body: serde_json::Value,
    key: &str,
) -> Result<Vec<T>, NetworkApiError> {
    let inner = body
        .get(key)
        .cloned()
        .ok_or_else(|| NetworkApiError::Api(format!("response is missing the '{key}' key")))?;
    serde_json::from_value(inner).map_err(NetworkApiError::Serialization)
}

/// Unwrap a single resource from under its documented response key
pub fn unwrap_object<T: DeserializeOwned>(
    body: serde_json::Value,
    key: &str,
) -> Result<T, NetworkApiError> {
    let inner = body
        .get(key)
        .cloned()
        .ok_or_else(|| NetworkApiError::Api(format!("response is missing the '{key}' key")))?;
    serde_json::from_value(inner).map_err(NetworkApiError::Serialization)
}
