//! Pluggable transaction source abstraction
//!
//! The aggregation engine is pure; everything network-shaped lives behind
//! this trait. The real implementation is `GaloyClient` (GraphQL over
//! reqwest); tests use `MockSource`.
//!
//! A source returns the complete transaction snapshot or an error. There is
//! no partial-success mode: the report is computed from a full list or not
//! at all.

mod galoy;
#[cfg(any(test, feature = "test-utils"))]
mod mock;

pub use galoy::GaloyClient;
#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockSource;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Transaction;

/// Trait defining the interface for transaction retrieval
///
/// Implementations should be Send + Sync to allow sharing across request
/// handlers.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Fetch the current transaction snapshot for the merchant wallet
    async fn list_transactions(&self) -> Result<Vec<Transaction>>;
}
