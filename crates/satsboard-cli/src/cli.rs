//! CLI argument definitions using clap
//!
//! This module contains the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// satsboard - Lightning event payment dashboard
#[derive(Parser)]
#[command(name = "satsboard")]
#[command(about = "Live payment stats for a Lightning event", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (merchant mapping, event start, API endpoint)
    ///
    /// Defaults to the embedded configuration. GALOY_ENDPOINT,
    /// GALOY_AUTH_TOKEN and EVENT_START environment variables override
    /// either source.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the dashboard API server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory containing the dashboard front-end to serve (e.g. ui/dist)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Fetch transactions once and print the payment stats report
    Stats {
        /// Print the raw report JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}
