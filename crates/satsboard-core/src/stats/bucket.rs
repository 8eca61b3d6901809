//! Transaction filter and bucketizer
//!
//! Selects the transactions that count towards the report and groups them
//! by resolved merchant. Buckets for every declared merchant exist even when
//! empty, so the dashboard's bar chart keeps a stable set of labels.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::{MerchantMap, MerchantName, Transaction, TxDirection, TxStatus};

/// One merchant's eligible transactions, most recent first
#[derive(Debug)]
pub struct MerchantBucket<'a> {
    pub merchant: MerchantName,
    pub txs: Vec<&'a Transaction>,
}

/// A transaction counts towards the report when it was received successfully
/// strictly after the event started.
pub fn is_eligible(tx: &Transaction, cutoff: DateTime<Utc>) -> bool {
    tx.created_at > cutoff
        && tx.direction == TxDirection::Receive
        && tx.status == TxStatus::Success
}

/// Group eligible transactions by resolved merchant.
///
/// Returns one bucket per declared merchant (in declaration order) plus the
/// unassigned bucket last. Within each bucket transactions are ordered by
/// `created_at` descending; the recent-transactions windowing in the
/// aggregator relies on that ordering.
pub fn bucket_transactions<'a>(
    transactions: &'a [Transaction],
    merchants: &MerchantMap,
    cutoff: DateTime<Utc>,
) -> Vec<MerchantBucket<'a>> {
    let mut eligible: Vec<&Transaction> = transactions
        .iter()
        .filter(|tx| is_eligible(tx, cutoff))
        .collect();
    // Stable sort: transactions sharing a timestamp keep their input order
    eligible.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut buckets: Vec<MerchantBucket<'a>> = merchants
        .merchants()
        .iter()
        .map(|name| MerchantBucket {
            merchant: MerchantName::Named(name.clone()),
            txs: Vec::new(),
        })
        .collect();
    buckets.push(MerchantBucket {
        merchant: MerchantName::Unassigned,
        txs: Vec::new(),
    });

    let index: HashMap<MerchantName, usize> = buckets
        .iter()
        .enumerate()
        .map(|(i, bucket)| (bucket.merchant.clone(), i))
        .collect();

    for tx in eligible {
        let merchant = merchants.resolve(tx.memo.as_deref());
        // Every resolvable name has a bucket by construction
        if let Some(&i) = index.get(&merchant) {
            buckets[i].txs.push(tx);
        }
    }

    buckets
}
