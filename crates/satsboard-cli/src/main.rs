//! satsboard CLI - Lightning event payment dashboard
//!
//! Usage:
//!   satsboard serve --port 3000     Start the dashboard API server
//!   satsboard stats                 Fetch and print the payment stats report

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Serve {
            port,
            host,
            static_dir,
        } => {
            commands::cmd_serve(cli.config.as_deref(), &host, port, static_dir.as_deref()).await
        }
        Commands::Stats { json } => commands::cmd_stats(cli.config.as_deref(), json).await,
    }
}
