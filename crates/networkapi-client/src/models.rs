//! NetworkAPI models
//!
//! Response-side serde models for the resources this client manages.
//! Request payloads are plain `serde_json::Value` maps: the service owns the
//! schema, so nothing is enforced client-side beyond identifier checks.

use serde::{Deserialize, Serialize};

/// IPv6 record from the v3 API (`api/v3/ipv6/`)
///
/// Only the stable fields are typed; everything else the serializer emits
/// lands in `extra` so callers can still reach it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ipv6 {
    pub id: u64,
    /// Human-readable address, e.g. "fdbe:bebe:bebe:1200:0:0:0:1"
    pub ip_formated: Option<String>,
    pub description: Option<String>,
    /// Parent network id
    pub networkipv6: Option<u64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Equipment brand from the legacy API (`brand/`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Brand {
    pub id: u64,
    pub name: String,
}

/// Identifier of a freshly created resource
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedId {
    pub id: u64,
}
