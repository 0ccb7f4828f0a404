//! NetworkAPI REST Client
//!
//! A Rust client library for interacting with the NetworkAPI REST service.
//! Exposes thin typed wrappers over the resource endpoints (IPv6 addresses,
//! equipment brands) with local identifier validation and typed errors.
//!
//! # Example
//!
//! ```no_run
//! use networkapi_client::NetworkApiClient;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client
//! let client = NetworkApiClient::new(
//!     "http://networkapi:8000".to_string(),
//!     "admin".to_string(),
//!     "password".to_string(),
//!     None,
//! )?;
//!
//! // Search IPv6 addresses
//! let ipv6s = client.search_ipv6s(&[("kind", "basic")]).await?;
//!
//! // Create IPv6 records; payloads have no client-side schema
//! let ids = client
//!     .create_ipv6s(&[json!({ "networkipv6": 10, "description": "loopback" })])
//!     .await?;
//!
//! // Bulk delete by id; the path joins ids with ';'
//! client.delete_ipv6s(&ids).await?;
//!
//! // Brand operations (legacy endpoint)
//! let brand_id = client.create_brand("Cisco").await?;
//! client.rename_brand(brand_id, "Cisco Systems").await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **IPv6 Operations**: Search, get, create, update and delete IPv6 records
//! - **Brand Operations**: List, create, rename and delete equipment brands
//! - **Local Validation**: Malformed identifiers are rejected before any HTTP call
//! - **Typed Errors**: Legacy NetworkAPI error codes map to dedicated variants

pub mod client;
pub mod common;
pub mod error;
pub mod models;
#[path = "trait.rs"]
pub mod networkapi_trait;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;

pub use client::NetworkApiClient;
pub use common::HttpClient;
pub use error::NetworkApiError;
pub use models::*;
pub use networkapi_trait::NetworkApiClientTrait;
#[cfg(any(test, feature = "test-util"))]
pub use mock::MockNetworkApiClient;
