//! Dashboard configuration
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit TOML file, when one is passed (`--config`)
//! 2. Embedded defaults (compiled into the binary)
//!
//! Environment variables win over either layer:
//! - `GALOY_ENDPOINT`: GraphQL endpoint of the payments API
//! - `GALOY_AUTH_TOKEN`: Bearer token for the merchant wallet
//! - `EVENT_START`: RFC 3339 instant; transactions at or before it are
//!   excluded from the report

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::MerchantMap;

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/satsboard.toml");

/// Resolved dashboard configuration
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Galoy GraphQL endpoint
    pub api_endpoint: String,
    /// Bearer token for the merchant wallet
    pub auth_token: String,
    /// Cutoff instant; only strictly-later transactions count
    pub event_start: DateTime<Utc>,
    /// Memo -> merchant display name mapping
    pub merchants: MerchantMap,
}

/// On-disk config file shape
#[derive(Debug, Deserialize)]
struct ConfigFile {
    api: ApiSection,
    event: EventSection,
    /// BTreeMap keeps declared-merchant order deterministic (sorted by memo)
    #[serde(default)]
    merchants: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct ApiSection {
    endpoint: String,
    #[serde(default)]
    token: String,
}

#[derive(Debug, Deserialize)]
struct EventSection {
    start: DateTime<Utc>,
}

impl DashboardConfig {
    /// Load config from an optional override file, then apply env overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let raw = match path {
            Some(p) => fs::read_to_string(p)?,
            None => DEFAULT_CONFIG.to_string(),
        };
        let config = Self::from_toml_str(&raw)?;
        config.with_overrides(
            std::env::var("GALOY_ENDPOINT").ok(),
            std::env::var("GALOY_AUTH_TOKEN").ok(),
            std::env::var("EVENT_START").ok(),
        )
    }

    /// Parse a config file body
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(raw)?;
        Ok(Self {
            api_endpoint: file.api.endpoint,
            auth_token: file.api.token,
            event_start: file.event.start,
            merchants: MerchantMap::new(file.merchants),
        })
    }

    /// Apply overrides on top of the parsed file values
    pub fn with_overrides(
        mut self,
        endpoint: Option<String>,
        token: Option<String>,
        event_start: Option<String>,
    ) -> Result<Self> {
        if let Some(endpoint) = endpoint {
            self.api_endpoint = endpoint;
        }
        if let Some(token) = token {
            self.auth_token = token;
        }
        if let Some(start) = event_start {
            self.event_start = start
                .parse::<DateTime<Utc>>()
                .map_err(|e| Error::Config(format!("Invalid EVENT_START '{}': {}", start, e)))?;
        }
        Ok(self)
    }
}
