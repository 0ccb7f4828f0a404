//! NetworkApiClient trait for mocking
//!
//! This trait abstracts the NetworkApiClient to enable mocking in unit tests.
//! The concrete NetworkApiClient implements this trait, and tests can use mock
//! implementations.

use crate::error::NetworkApiError;
use crate::models::{Brand, Ipv6};

/// Trait for NetworkAPI client operations
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait NetworkApiClientTrait: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    // IPv6 Operations
    async fn search_ipv6s(&self, filters: &[(&str, &str)]) -> Result<Vec<Ipv6>, NetworkApiError>;
    async fn get_ipv6s(&self, ids: &[u64], filters: &[(&str, &str)]) -> Result<Vec<Ipv6>, NetworkApiError>;
    async fn create_ipv6s(&self, ipv6s: &[serde_json::Value]) -> Result<Vec<u64>, NetworkApiError>;
    async fn update_ipv6s(&self, ipv6s: &[serde_json::Value]) -> Result<(), NetworkApiError>;
    async fn delete_ipv6s(&self, ids: &[u64]) -> Result<(), NetworkApiError>;

    // Brand Operations
    async fn list_brands(&self) -> Result<Vec<Brand>, NetworkApiError>;
    async fn get_brand(&self, id: u64) -> Result<Brand, NetworkApiError>;
    async fn create_brand(&self, name: &str) -> Result<u64, NetworkApiError>;
    async fn rename_brand(&self, id: u64, name: &str) -> Result<(), NetworkApiError>;
    async fn delete_brand(&self, id: u64) -> Result<(), NetworkApiError>;
}
