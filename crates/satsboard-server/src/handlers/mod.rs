//! HTTP request handlers

mod stats;

pub use stats::{get_health, get_stats, list_merchants};
