//! Integration tests for satsboard-core
//!
//! These tests exercise the full filter → bucket → aggregate pipeline the
//! way the stats endpoint drives it.

use chrono::{DateTime, TimeZone, Utc};
use satsboard_core::{
    models::{MerchantMap, Transaction, TxDirection, TxStatus},
    stats::summarize,
};

fn date(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn tx(
    id: &str,
    direction: TxDirection,
    status: TxStatus,
    memo: Option<&str>,
    created_at: &str,
    amount: i64,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        status,
        direction,
        memo: memo.map(String::from),
        created_at: date(created_at),
        settlement_amount: amount,
        settlement_fee: 0,
        settlement_currency: Default::default(),
        settlement_price: None,
    }
}

fn received(id: &str, memo: Option<&str>, created_at: &str, amount: i64) -> Transaction {
    tx(id, TxDirection::Receive, TxStatus::Success, memo, created_at, amount)
}

// =============================================================================
// End-to-end scenario
// =============================================================================

#[test]
fn test_end_to_end_report() {
    let map = MerchantMap::new([("X", "Shop")]);
    let cutoff = date("2022-01-01T00:00:00Z");
    let transactions = vec![
        received("t1", Some("X"), "2022-01-02T00:00:00Z", 100),
        received("t2", Some("Y"), "2022-01-03T00:00:00Z", 50),
        // Before cutoff: excluded
        received("t3", Some("X"), "2021-12-31T00:00:00Z", 999),
        // Wrong direction: excluded
        tx("t4", TxDirection::Send, TxStatus::Success, Some("X"), "2022-01-04T00:00:00Z", 10),
    ];

    let summary = summarize(&transactions, &map, cutoff);

    assert_eq!(summary.tx_count, 2);
    assert_eq!(summary.sats_spent, 150);
    assert_eq!(summary.min_tx_amount_in_sats, 50);
    assert_eq!(summary.max_tx_amount_in_sats, 100);
    assert_eq!(summary.avg_tx_amount_in_sats, 75);

    let shop = summary
        .merchant_stats
        .iter()
        .find(|m| m.name == "Shop")
        .unwrap();
    assert_eq!(shop.tx_count, 1);
    assert_eq!(shop.sats_spent, 100);
    assert_eq!(shop.min_tx_amount_in_sats, 100);
    assert_eq!(shop.max_tx_amount_in_sats, 100);
    assert_eq!(shop.avg_tx_amount_in_sats, 100);

    let other = summary
        .merchant_stats
        .iter()
        .find(|m| m.name == "Other")
        .unwrap();
    assert_eq!(other.tx_count, 1);
    assert_eq!(other.sats_spent, 50);
    assert_eq!(other.avg_tx_amount_in_sats, 50);

    let recent: Vec<(&str, i64)> = summary
        .recent_txs
        .iter()
        .map(|t| (t.merchant.as_str(), t.amount_in_sats))
        .collect();
    assert_eq!(recent, vec![("Other", 50), ("Shop", 100)]);
    assert_eq!(summary.recent_txs[0].date, date("2022-01-03T00:00:00Z"));
    assert_eq!(summary.recent_txs[1].date, date("2022-01-02T00:00:00Z"));
}

// =============================================================================
// Properties
// =============================================================================

/// Conservation: global sums equal the sum of per-merchant sums
#[test]
fn test_global_totals_equal_bucket_totals() {
    let map = MerchantMap::new([("A", "Alpha"), ("B", "Beta")]);
    let cutoff = Utc.timestamp_opt(0, 0).single().unwrap();
    let transactions = vec![
        received("t1", Some("A"), "2022-11-10T15:05:10Z", 11255),
        received("t2", Some("A"), "2022-11-10T15:05:47Z", 22552),
        received("t3", Some("B"), "2022-11-10T15:10:33Z", 19564),
        received("t4", Some("nope"), "2022-11-10T18:55:17Z", 5),
        received("t5", None, "2022-11-10T18:03:59Z", 164),
    ];

    let summary = summarize(&transactions, &map, cutoff);

    let bucket_sats: i64 = summary.merchant_stats.iter().map(|m| m.sats_spent).sum();
    let bucket_count: i64 = summary.merchant_stats.iter().map(|m| m.tx_count).sum();
    assert_eq!(summary.sats_spent, bucket_sats);
    assert_eq!(summary.tx_count, bucket_count);
    assert_eq!(summary.tx_count, 5);
}

/// Empty input: every declared bucket exists, everything zero, no fault
#[test]
fn test_empty_input() {
    let map = MerchantMap::new([("A", "Alpha"), ("B", "Beta")]);
    let summary = summarize(&[], &map, Utc::now());

    // Alpha, Beta, Other
    assert_eq!(summary.merchant_stats.len(), 3);
    assert!(summary.merchant_stats.iter().all(|m| m.tx_count == 0));
    assert_eq!(summary.tx_count, 0);
    assert_eq!(summary.avg_tx_amount_in_sats, 0);
    assert!(summary.recent_txs.is_empty());
}

/// Min/max scope: an empty merchant never drags the global minimum to 0
#[test]
fn test_global_min_ignores_empty_merchants() {
    let map = MerchantMap::new([("A", "Alpha"), ("B", "Beta")]);
    let cutoff = Utc.timestamp_opt(0, 0).single().unwrap();
    let transactions = vec![received("t1", Some("A"), "2022-11-10T15:05:10Z", 50)];

    let summary = summarize(&transactions, &map, cutoff);

    assert_eq!(summary.min_tx_amount_in_sats, 50);
    let beta = summary
        .merchant_stats
        .iter()
        .find(|m| m.name == "Beta")
        .unwrap();
    assert_eq!(beta.tx_count, 0);
    assert_eq!(beta.min_tx_amount_in_sats, 0);
}

/// Recency window: 7 transactions, the 5 newest survive, descending
#[test]
fn test_recent_window() {
    let map = MerchantMap::new([("A", "Alpha")]);
    let cutoff = Utc.timestamp_opt(0, 0).single().unwrap();
    let transactions: Vec<Transaction> = (1..=7)
        .map(|i| {
            received(
                &format!("t{i}"),
                Some("A"),
                &format!("2022-11-{:02}T00:00:00Z", i),
                i,
            )
        })
        .collect();

    let summary = summarize(&transactions, &map, cutoff);
    let alpha = &summary.merchant_stats[0];

    assert_eq!(alpha.recent_txs.len(), 5);
    let amounts: Vec<i64> = alpha.recent_txs.iter().map(|t| t.amount_in_sats).collect();
    assert_eq!(amounts, vec![7, 6, 5, 4, 3]);
}

/// Unknown memo: counted under Other and in global totals, nowhere else
#[test]
fn test_unknown_memo_policy_is_inclusive() {
    let map = MerchantMap::new([("A", "Alpha")]);
    let cutoff = Utc.timestamp_opt(0, 0).single().unwrap();
    let transactions = vec![received("t1", Some("Unmapped"), "2022-11-10T15:05:10Z", 42)];

    let summary = summarize(&transactions, &map, cutoff);

    assert_eq!(summary.tx_count, 1);
    assert_eq!(summary.sats_spent, 42);

    let alpha = summary
        .merchant_stats
        .iter()
        .find(|m| m.name == "Alpha")
        .unwrap();
    assert_eq!(alpha.tx_count, 0);

    let other = summary
        .merchant_stats
        .iter()
        .find(|m| m.name == "Other")
        .unwrap();
    assert_eq!(other.tx_count, 1);
    assert_eq!(other.sats_spent, 42);
}

/// Filter correctness across all three predicates at once
#[test]
fn test_filter_correctness() {
    let map = MerchantMap::new([("A", "Alpha")]);
    let cutoff = date("2022-11-01T00:00:00Z");
    let transactions = vec![
        received("keep", Some("A"), "2022-11-02T00:00:00Z", 100),
        // At cutoff exactly: strict-after semantics exclude it
        received("at-cutoff", Some("A"), "2022-11-01T00:00:00Z", 1),
        tx("sent", TxDirection::Send, TxStatus::Success, Some("A"), "2022-11-03T00:00:00Z", 1),
        tx("pending", TxDirection::Receive, TxStatus::Pending, Some("A"), "2022-11-03T00:00:00Z", 1),
        tx("failed", TxDirection::Receive, TxStatus::Failure, Some("A"), "2022-11-03T00:00:00Z", 1),
    ];

    let summary = summarize(&transactions, &map, cutoff);

    assert_eq!(summary.tx_count, 1);
    assert_eq!(summary.sats_spent, 100);
    assert_eq!(summary.merchant_stats[0].recent_txs.len(), 1);
}

/// The report snapshot from the original conference dashboard, rebuilt from
/// its raw transactions
#[test]
fn test_conference_style_snapshot() {
    let map = MerchantMap::new([
        ("AB22Swag", "Swag"),
        ("AB22Kebab", "Kebab"),
    ]);
    let cutoff = date("2022-10-03T00:00:00Z");
    let transactions = vec![
        received("swag", Some("AB22Swag"), "2022-11-10T15:12:37Z", 112413),
        received("kebab1", Some("AB22Kebab"), "2022-11-10T15:05:47Z", 22552),
        received("kebab2", Some("AB22Kebab"), "2022-11-10T15:05:10Z", 11255),
        received("tip", None, "2022-11-10T18:55:17Z", 5),
    ];

    let summary = summarize(&transactions, &map, cutoff);

    let kebab = summary
        .merchant_stats
        .iter()
        .find(|m| m.name == "Kebab")
        .unwrap();
    assert_eq!(kebab.sats_spent, 33807);
    assert_eq!(kebab.avg_tx_amount_in_sats, 16904); // 33807 / 2 rounded
    assert_eq!(kebab.max_tx_amount_in_sats, 22552);
    assert_eq!(kebab.min_tx_amount_in_sats, 11255);

    assert_eq!(summary.tx_count, 4);
    assert_eq!(summary.sats_spent, 146225);
    assert_eq!(summary.min_tx_amount_in_sats, 5);
    assert_eq!(summary.max_tx_amount_in_sats, 112413);

    let order: Vec<&str> = summary.recent_txs.iter().map(|t| t.merchant.as_str()).collect();
    assert_eq!(order, vec!["Other", "Swag", "Kebab", "Kebab"]);
}
