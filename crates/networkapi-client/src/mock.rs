//! Mock NetworkApiClient for unit testing
//!
//! Provides an in-memory implementation of [`NetworkApiClientTrait`] that can
//! be used in unit tests without a running NetworkAPI instance. The mock
//! enforces the same local identifier validation as the real client, so
//! malformed arguments fail the same way in both.

use crate::common::ids;
use crate::error::NetworkApiError;
use crate::models::{Brand, Ipv6};
use crate::networkapi_trait::NetworkApiClientTrait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Mock NetworkApiClient for testing
///
/// Stores resources in memory; all operations behave as if the remote
/// service accepted them.
#[derive(Debug, Clone)]
pub struct MockNetworkApiClient {
    base_url: String,
    ipv6s: Arc<Mutex<HashMap<u64, Ipv6>>>,
    brands: Arc<Mutex<HashMap<u64, Brand>>>,
    next_id: Arc<Mutex<u64>>,
}

impl MockNetworkApiClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ipv6s: Arc::new(Mutex::new(HashMap::new())),
            brands: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(Mutex::new(1)),
        }
    }

    /// Seed an IPv6 record
    pub fn with_ipv6(self, ipv6: Ipv6) -> Self {
        self.lock(&self.ipv6s).insert(ipv6.id, ipv6);
        self
    }

    /// Seed a brand
    pub fn with_brand(self, brand: Brand) -> Self {
        self.lock(&self.brands).insert(brand.id, brand);
        self
    }

    fn lock<'a, T>(&self, store: &'a Arc<Mutex<T>>) -> MutexGuard<'a, T> {
        match store.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn allocate_id(&self) -> u64 {
        let mut next = self.lock(&self.next_id);
        let id = *next;
        *next += 1;
        id
    }
}

#[async_trait::async_trait]
impl NetworkApiClientTrait for MockNetworkApiClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn search_ipv6s(
        &self,
        _filters: &[(&str, &str)],
    ) -> Result<Vec<Ipv6>, NetworkApiError> {
        let store = self.lock(&self.ipv6s);
        let mut results: Vec<Ipv6> = store.values().cloned().collect();
        results.sort_by_key(|ipv6| ipv6.id);
        Ok(results)
    }

    async fn get_ipv6s(
        &self,
        ids_to_get: &[u64],
        _filters: &[(&str, &str)],
    ) -> Result<Vec<Ipv6>, NetworkApiError> {
        ids::validate_ids(ids_to_get)?;
        let store = self.lock(&self.ipv6s);
        let mut results = Vec::with_capacity(ids_to_get.len());
        for id in ids_to_get {
            let ipv6 = store
                .get(id)
                .cloned()
                .ok_or_else(|| NetworkApiError::NotFound(format!("IPv6 {id} not found")))?;
            results.push(ipv6);
        }
        Ok(results)
    }

    async fn create_ipv6s(
        &self,
        ipv6s: &[serde_json::Value],
    ) -> Result<Vec<u64>, NetworkApiError> {
        if ipv6s.is_empty() {
            return Err(NetworkApiError::InvalidParameter(
                "at least one payload is required".to_string(),
            ));
        }

        let mut created = Vec::with_capacity(ipv6s.len());
        for payload in ipv6s {
            let id = self.allocate_id();
            let mut record = payload.clone();
            if let Some(object) = record.as_object_mut() {
                object.insert("id".to_string(), serde_json::Value::from(id));
            }
            let ipv6: Ipv6 = serde_json::from_value(record)?;
            self.lock(&self.ipv6s).insert(id, ipv6);
            created.push(id);
        }
        Ok(created)
    }

    async fn update_ipv6s(&self, ipv6s: &[serde_json::Value]) -> Result<(), NetworkApiError> {
        if ipv6s.is_empty() {
            return Err(NetworkApiError::InvalidParameter(
                "at least one payload is required".to_string(),
            ));
        }

        // Validate every payload before touching the store, mirroring the
        // all-or-nothing semantics of a single HTTP exchange.
        let mut updates = Vec::with_capacity(ipv6s.len());
        for payload in ipv6s {
            let id = ids::id_from_payload(payload)?;
            let ipv6: Ipv6 = serde_json::from_value(payload.clone())?;
            updates.push((id, ipv6));
        }

        let mut store = self.lock(&self.ipv6s);
        for (id, _) in &updates {
            if !store.contains_key(id) {
                return Err(NetworkApiError::NotFound(format!("IPv6 {id} not found")));
            }
        }
        for (id, ipv6) in updates {
            store.insert(id, ipv6);
        }
        Ok(())
    }

    async fn delete_ipv6s(&self, ids_to_delete: &[u64]) -> Result<(), NetworkApiError> {
        ids::validate_ids(ids_to_delete)?;
        let mut store = self.lock(&self.ipv6s);
        for id in ids_to_delete {
            if !store.contains_key(id) {
                return Err(NetworkApiError::NotFound(format!("IPv6 {id} not found")));
            }
        }
        for id in ids_to_delete {
            store.remove(id);
        }
        Ok(())
    }

    async fn list_brands(&self) -> Result<Vec<Brand>, NetworkApiError> {
        let store = self.lock(&self.brands);
        let mut results: Vec<Brand> = store.values().cloned().collect();
        results.sort_by_key(|brand| brand.id);
        Ok(results)
    }

    async fn get_brand(&self, id: u64) -> Result<Brand, NetworkApiError> {
        ids::validate_id(id)?;
        self.lock(&self.brands)
            .get(&id)
            .cloned()
            .ok_or_else(|| NetworkApiError::NotFound(format!("Brand {id} not found")))
    }

    async fn create_brand(&self, name: &str) -> Result<u64, NetworkApiError> {
        let len = name.chars().count();
        if !(3..=100).contains(&len) {
            return Err(NetworkApiError::InvalidParameter(format!(
                "brand name must be between 3 and 100 characters, got {len}"
            )));
        }

        let mut store = self.lock(&self.brands);
        if store.values().any(|brand| brand.name == name) {
            return Err(NetworkApiError::DuplicateName(format!(
                "brand '{name}' is already registered"
            )));
        }

        let id = self.allocate_id();
        store.insert(id, Brand { id, name: name.to_string() });
        Ok(id)
    }

    async fn rename_brand(&self, id: u64, name: &str) -> Result<(), NetworkApiError> {
        ids::validate_id(id)?;
        let len = name.chars().count();
        if !(3..=100).contains(&len) {
            return Err(NetworkApiError::InvalidParameter(format!(
                "brand name must be between 3 and 100 characters, got {len}"
            )));
        }

        let mut store = self.lock(&self.brands);
        if store.values().any(|brand| brand.id != id && brand.name == name) {
            return Err(NetworkApiError::DuplicateName(format!(
                "brand '{name}' is already registered"
            )));
        }
        match store.get_mut(&id) {
            Some(brand) => {
                brand.name = name.to_string();
                Ok(())
            }
            None => Err(NetworkApiError::NotFound(format!("Brand {id} not found"))),
        }
    }

    async fn delete_brand(&self, id: u64) -> Result<(), NetworkApiError> {
        ids::validate_id(id)?;
        match self.lock(&self.brands).remove(&id) {
            Some(_) => Ok(()),
            None => Err(NetworkApiError::NotFound(format!("Brand {id} not found"))),
        }
    }
}
