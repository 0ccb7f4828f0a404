//! NetworkAPI client
//!
//! Thin method wrappers over the NetworkAPI resource endpoints. The v3
//! resources (`api/v3/ipv6/`) delegate to the generic operations in
//! [`crate::common::query`]; the legacy brand endpoint keeps its own
//! single-object request shape.

use crate::common::{HttpClient, ids, query, unwrap_list, unwrap_object};
use crate::error::NetworkApiError;
use crate::models::{Brand, CreatedId, Ipv6};
use crate::networkapi_trait::NetworkApiClientTrait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

const IPV6_ENDPOINT: &str = "api/v3/ipv6/";
const IPV6_KEY: &str = "ipv6s";
const BRAND_KEY: &str = "brand";

/// NetworkAPI client
#[derive(Debug)]
pub struct NetworkApiClient {
    http: HttpClient,
}

impl NetworkApiClient {
    /// Create a new NetworkAPI client
    ///
    /// # Arguments
    /// * `base_url` - NetworkAPI base URL (e.g., "http://networkapi:8000")
    /// * `username` - User for authentication
    /// * `password` - Password for authentication
    /// * `ldap_user` - Optional LDAP user forwarded with every request
    pub fn new(
        base_url: String,
        username: String,
        password: String,
        ldap_user: Option<String>,
    ) -> Result<Self, NetworkApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(NetworkApiError::Http)?;

        Ok(Self {
            http: HttpClient::new(client, base_url, username, password, ldap_user),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ====================
    // IPv6 API Methods
    // ====================

    /// Search IPv6 records
    ///
    /// All filters are forwarded unchanged into the query string
    /// (e.g., `[("kind", "basic"), ("include", "description")]`).
    pub async fn search_ipv6s(
        &self,
        filters: &[(&str, &str)],
    ) -> Result<Vec<Ipv6>, NetworkApiError> {
        debug!("Searching IPv6 records with filters: {:?}", filters);
        query::search_resources(&self.http, IPV6_ENDPOINT, IPV6_KEY, filters).await
    }

    /// Get IPv6 records by their ids
    ///
    /// The path joins the ids with `;`, so all records travel in one
    /// exchange. Optional filters narrow the response fields.
    pub async fn get_ipv6s(
        &self,
        ids: &[u64],
        filters: &[(&str, &str)],
    ) -> Result<Vec<Ipv6>, NetworkApiError> {
        debug!("Fetching IPv6 records {:?}", ids);
        query::get_resources(&self.http, IPV6_ENDPOINT, IPV6_KEY, ids, filters).await
    }

    /// Create IPv6 records
    ///
    /// Payloads are schema-free maps; the service validates them. Returns
    /// the identifiers of the created records.
    pub async fn create_ipv6s(
        &self,
        ipv6s: &[serde_json::Value],
    ) -> Result<Vec<u64>, NetworkApiError> {
        debug!("Creating {} IPv6 record(s)", ipv6s.len());
        query::create_resources(&self.http, IPV6_ENDPOINT, IPV6_KEY, ipv6s).await
    }

    /// Update IPv6 records
    ///
    /// Each payload must carry a positive integer `"id"` field; the ids are
    /// joined into the path and the payloads travel under the `"ipv6s"` key.
    pub async fn update_ipv6s(&self, ipv6s: &[serde_json::Value]) -> Result<(), NetworkApiError> {
        debug!("Updating {} IPv6 record(s)", ipv6s.len());
        query::update_resources(&self.http, IPV6_ENDPOINT, IPV6_KEY, ipv6s).await
    }

    /// Delete IPv6 records by their ids
    pub async fn delete_ipv6s(&self, ids: &[u64]) -> Result<(), NetworkApiError> {
        debug!("Deleting IPv6 records {:?}", ids);
        query::delete_resources(&self.http, IPV6_ENDPOINT, ids).await
    }

    // ====================
    // Brand API Methods
    // ====================

    /// List all equipment brands
    pub async fn list_brands(&self) -> Result<Vec<Brand>, NetworkApiError> {
        debug!("Listing all brands");
        let body: serde_json::Value = self.http.get("brand/all/").await?;
        unwrap_list(body, BRAND_KEY)
    }

    /// Get a brand by its identifier
    pub async fn get_brand(&self, id: u64) -> Result<Brand, NetworkApiError> {
        ids::validate_id(id)?;
        debug!("Fetching brand {}", id);
        let body: serde_json::Value = self.http.get(&format!("brand/{id}/")).await?;
        unwrap_object(body, BRAND_KEY)
    }

    /// Create a brand and return its identifier
    ///
    /// The name must be between 3 and 100 characters; anything else is
    /// rejected before the request is made.
    pub async fn create_brand(&self, name: &str) -> Result<u64, NetworkApiError> {
        validate_brand_name(name)?;
        debug!("Creating brand {}", name);

        let body = serde_json::json!({ "brand": { "name": name } });
        let response: serde_json::Value = self.http.post("brand/", &body).await?;
        let created: CreatedId = unwrap_object(response, BRAND_KEY)?;
        Ok(created.id)
    }

    /// Rename a brand
    pub async fn rename_brand(&self, id: u64, name: &str) -> Result<(), NetworkApiError> {
        ids::validate_id(id)?;
        validate_brand_name(name)?;
        debug!("Renaming brand {} to {}", id, name);

        let body = serde_json::json!({ "brand": { "name": name } });
        self.http.put(&format!("brand/{id}/"), &body).await
    }

    /// Delete a brand by its identifier
    pub async fn delete_brand(&self, id: u64) -> Result<(), NetworkApiError> {
        ids::validate_id(id)?;
        debug!("Deleting brand {}", id);
        self.http.delete(&format!("brand/{id}/")).await
    }
}

/// Brand names must be 3..=100 characters
fn validate_brand_name(name: &str) -> Result<(), NetworkApiError> {
    let len = name.chars().count();
    if !(3..=100).contains(&len) {
        return Err(NetworkApiError::InvalidParameter(format!(
            "brand name must be between 3 and 100 characters, got {len}"
        )));
    }
    Ok(())
}

#[async_trait::async_trait]
impl NetworkApiClientTrait for NetworkApiClient {
    fn base_url(&self) -> &str {
        self.base_url()
    }

    async fn search_ipv6s(&self, filters: &[(&str, &str)]) -> Result<Vec<Ipv6>, NetworkApiError> {
        self.search_ipv6s(filters).await
    }

    async fn get_ipv6s(
        &self,
        ids: &[u64],
        filters: &[(&str, &str)],
    ) -> Result<Vec<Ipv6>, NetworkApiError> {
        self.get_ipv6s(ids, filters).await
    }

    async fn create_ipv6s(
        &self,
        ipv6s: &[serde_json::Value],
    ) -> Result<Vec<u64>, NetworkApiError> {
        self.create_ipv6s(ipv6s).await
    }

    async fn update_ipv6s(&self, ipv6s: &[serde_json::Value]) -> Result<(), NetworkApiError> {
        self.update_ipv6s(ipv6s).await
    }

    async fn delete_ipv6s(&self, ids: &[u64]) -> Result<(), NetworkApiError> {
        self.delete_ipv6s(ids).await
    }

    async fn list_brands(&self) -> Result<Vec<Brand>, NetworkApiError> {
        self.list_brands().await
    }

    async fn get_brand(&self, id: u64) -> Result<Brand, NetworkApiError> {
        self.get_brand(id).await
    }

    async fn create_brand(&self, name: &str) -> Result<u64, NetworkApiError> {
        self.create_brand(name).await
    }

    async fn rename_brand(&self, id: u64, name: &str) -> Result<(), NetworkApiError> {
        self.rename_brand(id, name).await
    }

    async fn delete_brand(&self, id: u64) -> Result<(), NetworkApiError> {
        self.delete_brand(id).await
    }
}
