//! NetworkAPI client errors

use thiserror::Error;

/// Errors that can occur when interacting with the NetworkAPI service
#[derive(Debug, Error)]
pub enum NetworkApiError {
    /// HTTP request/response error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// NetworkAPI returned an error not covered by a dedicated variant
    #[error("NetworkAPI error: {0}")]
    Api(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Authentication failed (bad credentials, missing LDAP user, etc.)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request parameter, raised locally before any HTTP call
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A resource with the same name is already registered
    #[error("Duplicate name: {0}")]
    DuplicateName(String),

    /// NetworkAPI failed to access its database
    #[error("Database failure: {0}")]
    Database(String),

    /// NetworkAPI failed to generate the XML response
    #[error("XML generation failure: {0}")]
    XmlGeneration(String),
}

/// Legacy NetworkAPI failure body: `{"code": n, "description": s}`.
///
/// Codes carried over from the server's error table. Unknown codes fall back
/// to [`NetworkApiError::Api`].
pub fn from_legacy_code(code: u32, description: String) -> NetworkApiError {
    match code {
        1 => NetworkApiError::Database(description),
        3 => NetworkApiError::XmlGeneration(description),
        105 => NetworkApiError::InvalidParameter(description),
        167 => NetworkApiError::NotFound(description),
        250 => NetworkApiError::DuplicateName(description),
        _ => NetworkApiError::Api(format!("code {code}: {description}")),
    }
}
