//! Scope configuration
//!
//! Settings shared by every resource a registry creates.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Namespace used when neither the caller nor a descriptor supplies one.
pub const DEFAULT_NAMESPACE: &str = "kremling";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScopeConfig {
    /// Prefix of generated scope attribute names
    pub default_namespace: String,
}

impl ScopeConfig {
    pub fn new(default_namespace: impl Into<String>) -> Self {
        ScopeConfig {
            default_namespace: default_namespace.into(),
        }
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for ScopeConfig {
    fn default() -> Self {
        ScopeConfig {
            default_namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}
