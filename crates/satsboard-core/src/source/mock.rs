//! Mock transaction source for testing
//!
//! Returns a canned transaction list, or a forced failure for exercising the
//! upstream-error path without a network.

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::models::Transaction;

use super::TransactionSource;

/// Mock transaction source
#[derive(Clone, Default)]
pub struct MockSource {
    transactions: Vec<Transaction>,
    failing: bool,
}

impl MockSource {
    /// Source that yields the given snapshot
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions,
            failing: false,
        }
    }

    /// Source whose fetch always fails, as if the API were unreachable
    pub fn failing() -> Self {
        Self {
            transactions: Vec::new(),
            failing: true,
        }
    }
}

#[async_trait]
impl TransactionSource for MockSource {
    async fn list_transactions(&self) -> Result<Vec<Transaction>> {
        if self.failing {
            return Err(Error::Api("mock source failure".to_string()));
        }
        Ok(self.transactions.clone())
    }
}
