//! satsboard Core Library
//!
//! Shared functionality for the satsboard event payment dashboard:
//! - Domain models for Lightning transactions and the stats report
//! - Transaction filter/bucketizer and statistics aggregator
//! - Galoy GraphQL transaction source (plus a mock for tests)
//! - Configuration loading (merchant mapping, event start, API credentials)

pub mod config;
pub mod error;
pub mod models;
pub mod source;
pub mod stats;

pub use config::DashboardConfig;
pub use error::{Error, Result};
pub use models::{
    MerchantMap, MerchantName, MerchantStats, PaymentStatsSummary, RecentTx, Transaction,
    TxDirection, TxStatus, TxSummary, WalletCurrency,
};
pub use source::{GaloyClient, TransactionSource};
pub use stats::{summarize, RECENT_TX_WINDOW};

#[cfg(any(test, feature = "test-utils"))]
pub use source::MockSource;
