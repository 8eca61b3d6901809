//! Statistics aggregator
//!
//! Reduces each merchant's bucket into a `MerchantStats` record, then folds
//! those into the global `PaymentStatsSummary`. The global numeric fields are
//! always derived from the per-merchant stats rather than recomputed from raw
//! transactions, so the merchant-level and global numbers cannot drift apart.
//!
//! All arithmetic is on `i64`; an empty bucket reports 0 for its average,
//! minimum and maximum instead of dividing by zero.

use crate::models::{MerchantStats, PaymentStatsSummary, RecentTx, TxSummary};

use super::bucket::MerchantBucket;

/// Size of the recent-transactions window, per merchant and globally
pub const RECENT_TX_WINDOW: usize = 5;

/// Average rounded to the nearest integer, 0 when the bucket is empty
fn rounded_avg(sum: i64, count: i64) -> i64 {
    if count == 0 {
        return 0;
    }
    (sum + count / 2) / count
}

/// Reduce one bucket into its per-merchant stats.
///
/// The bucket's most-recent-first ordering makes the recent window a plain
/// prefix slice.
pub fn merchant_stats(bucket: &MerchantBucket<'_>) -> MerchantStats {
    let amounts = bucket.txs.iter().map(|tx| tx.settlement_amount);

    let sats_spent: i64 = amounts.clone().sum();
    let tx_count = bucket.txs.len() as i64;
    let max_tx_amount_in_sats = amounts.clone().max().unwrap_or(0);
    let min_tx_amount_in_sats = amounts.min().unwrap_or(0);

    let recent_txs = bucket
        .txs
        .iter()
        .take(RECENT_TX_WINDOW)
        .map(|tx| RecentTx {
            amount_in_sats: tx.settlement_amount,
            date: tx.created_at,
        })
        .collect();

    MerchantStats {
        name: bucket.merchant.to_string(),
        sats_spent,
        tx_count,
        avg_tx_amount_in_sats: rounded_avg(sats_spent, tx_count),
        max_tx_amount_in_sats,
        min_tx_amount_in_sats,
        recent_txs,
    }
}

/// Fold per-merchant stats into the global report.
///
/// Empty buckets carry a 0 sentinel in `min_tx_amount_in_sats`; the global
/// minimum considers only merchants that actually have transactions, so a
/// merchant with no sales never drags the event-wide minimum down to 0.
pub fn aggregate(merchant_stats: Vec<MerchantStats>) -> PaymentStatsSummary {
    let (sats_spent, tx_count, max_tx_amount_in_sats, min) = merchant_stats.iter().fold(
        (0i64, 0i64, 0i64, None::<i64>),
        |(sats, count, max, min), m| {
            let min = if m.tx_count > 0 {
                Some(min.map_or(m.min_tx_amount_in_sats, |v| v.min(m.min_tx_amount_in_sats)))
            } else {
                min
            };
            (
                sats + m.sats_spent,
                count + m.tx_count,
                max.max(m.max_tx_amount_in_sats),
                min,
            )
        },
    );

    let mut recent_txs: Vec<TxSummary> = merchant_stats
        .iter()
        .flat_map(|m| {
            m.recent_txs.iter().map(|tx| TxSummary {
                merchant: m.name.clone(),
                amount_in_sats: tx.amount_in_sats,
                date: tx.date,
            })
        })
        .collect();
    // Stable sort: date ties keep their per-merchant relative order
    recent_txs.sort_by(|a, b| b.date.cmp(&a.date));
    recent_txs.truncate(RECENT_TX_WINDOW);

    PaymentStatsSummary {
        sats_spent,
        tx_count,
        avg_tx_amount_in_sats: rounded_avg(sats_spent, tx_count),
        max_tx_amount_in_sats,
        min_tx_amount_in_sats: min.unwrap_or(0),
        merchant_stats,
        recent_txs,
    }
}
