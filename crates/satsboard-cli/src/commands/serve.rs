//! Server command implementation

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use super::build_client;

pub async fn cmd_serve(
    config_path: Option<&Path>,
    host: &str,
    port: u16,
    static_dir: Option<&Path>,
) -> Result<()> {
    let (config, client) = build_client(config_path)?;

    println!("🚀 Starting satsboard server...");
    println!("   Galoy endpoint: {}", config.api_endpoint);
    println!("   Event start:    {}", config.event_start.to_rfc3339());
    println!("   Merchants:      {}", config.merchants.merchants().join(", "));
    println!("   Listening:      http://{}:{}", host, port);
    if let Some(dir) = static_dir {
        println!("   Static files:   {}", dir.display());
    }
    println!();
    println!("   Press Ctrl+C to stop");

    // Comma-separated allowed CORS origins, e.g. for a separately-hosted UI
    let allowed_origins: Vec<String> = std::env::var("SATSBOARD_ALLOWED_ORIGINS")
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let server_config = satsboard_server::ServerConfig { allowed_origins };

    satsboard_server::serve(
        Arc::new(client),
        config.merchants,
        config.event_start,
        host,
        port,
        static_dir.and_then(|d| d.to_str()),
        server_config,
    )
    .await
}
