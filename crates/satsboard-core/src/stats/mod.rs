//! Transaction aggregation engine
//!
//! Pure computation from a transaction snapshot to the dashboard report:
//! filter and bucket by merchant, reduce each bucket, fold the buckets into
//! the global summary. Stateless; safe to run once per incoming request.

pub mod aggregate;
pub mod bucket;

use chrono::{DateTime, Utc};

use crate::models::{MerchantMap, PaymentStatsSummary, Transaction};

pub use aggregate::RECENT_TX_WINDOW;
pub use bucket::MerchantBucket;

/// Compute the full report for one transaction snapshot.
///
/// `cutoff` is the event start instant; only transactions strictly after it
/// are counted. Merchant order in the result follows the mapping's declared
/// order with the unassigned bucket last; presentation-layer sorting (e.g.
/// alphabetical bars) is left to the caller.
pub fn summarize(
    transactions: &[Transaction],
    merchants: &MerchantMap,
    cutoff: DateTime<Utc>,
) -> PaymentStatsSummary {
    let buckets = bucket::bucket_transactions(transactions, merchants, cutoff);
    let merchant_stats = buckets.iter().map(aggregate::merchant_stats).collect();
    aggregate::aggregate(merchant_stats)
}
