//! Identifier validation and path building
//!
//! Bulk endpoints address multiple records in one exchange by joining ids
//! with `;` in the path, e.g. `api/v3/ipv6/1;2;3/`. All validation happens
//! here, before any HTTP call is made.

use crate::error::NetworkApiError;

/// Check that an id list is non-empty and every id is strictly positive
pub fn validate_ids(ids: &[u64]) -> Result<(), NetworkApiError> {
    if ids.is_empty() {
        return Err(NetworkApiError::InvalidParameter(
            "at least one identifier is required".to_string(),
        ));
    }
    if let Some(bad) = ids.iter().find(|id| **id == 0) {
        return Err(NetworkApiError::InvalidParameter(format!(
            "identifier {bad} is invalid, identifiers must be greater than zero"
        )));
    }
    Ok(())
}

/// Check that a single id is strictly positive
pub fn validate_id(id: u64) -> Result<(), NetworkApiError> {
    if id == 0 {
        return Err(NetworkApiError::InvalidParameter(
            "identifier is invalid or was not informed".to_string(),
        ));
    }
    Ok(())
}

/// Join ids with the `;` bulk delimiter
pub fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(";")
}

/// Build `{endpoint}{ids joined by ';'}/` after validating the ids
pub fn path_with_ids(endpoint: &str, ids: &[u64]) -> Result<String, NetworkApiError> {
    validate_ids(ids)?;
    Ok(format!("{}{}/", endpoint, join_ids(ids)))
}

/// Extract a positive integer `"id"` field from an update payload
pub fn id_from_payload(payload: &serde_json::Value) -> Result<u64, NetworkApiError> {
    let id = payload
        .get("id")
        .and_then(serde_json::Value::as_u64)
        .ok_or_else(|| {
            NetworkApiError::InvalidParameter(
                "payload is missing a numeric 'id' field".to_string(),
            )
        })?;
    validate_id(id)?;
    Ok(id)
}
