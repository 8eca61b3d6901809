//! Command implementations

mod serve;
mod stats;

pub use serve::cmd_serve;
pub use stats::cmd_stats;

use std::path::Path;

use anyhow::{bail, Context, Result};

use satsboard_core::{DashboardConfig, GaloyClient};

/// Load config and build the Galoy client from it.
///
/// The auth token has no usable default; failing early here beats a 401
/// buried in the first fetch.
pub(crate) fn build_client(config_path: Option<&Path>) -> Result<(DashboardConfig, GaloyClient)> {
    let config = DashboardConfig::load(config_path).context("Failed to load configuration")?;

    if config.auth_token.is_empty() {
        bail!("No auth token configured. Set GALOY_AUTH_TOKEN or add [api] token to the config file.");
    }

    let client = GaloyClient::new(&config.api_endpoint, &config.auth_token);
    Ok((config, client))
}
