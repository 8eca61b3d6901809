//! Stats command implementation

use std::path::Path;

use anyhow::{Context, Result};

use satsboard_core::models::PaymentStatsSummary;
use satsboard_core::source::TransactionSource;
use satsboard_core::stats::summarize;

use super::build_client;

pub async fn cmd_stats(config_path: Option<&Path>, json: bool) -> Result<()> {
    let (config, client) = build_client(config_path)?;

    let transactions = client
        .list_transactions()
        .await
        .context("Failed to fetch transactions from the Galoy API")?;

    let summary = summarize(&transactions, &config.merchants, config.event_start);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &PaymentStatsSummary) {
    println!("⚡ Payment stats");
    println!();
    println!("   Sats spent:   {}", summary.sats_spent);
    println!("   Transactions: {}", summary.tx_count);
    println!("   Average:      {} sats", summary.avg_tx_amount_in_sats);
    println!("   Largest:      {} sats", summary.max_tx_amount_in_sats);
    println!("   Smallest:     {} sats", summary.min_tx_amount_in_sats);
    println!();

    println!(
        "   {:<16} {:>8} {:>12} {:>10} {:>10} {:>10}",
        "Merchant", "Txs", "Sats", "Avg", "Max", "Min"
    );
    for merchant in &summary.merchant_stats {
        println!(
            "   {:<16} {:>8} {:>12} {:>10} {:>10} {:>10}",
            merchant.name,
            merchant.tx_count,
            merchant.sats_spent,
            merchant.avg_tx_amount_in_sats,
            merchant.max_tx_amount_in_sats,
            merchant.min_tx_amount_in_sats,
        );
    }

    if !summary.recent_txs.is_empty() {
        println!();
        println!("   Recent transactions:");
        for tx in &summary.recent_txs {
            println!(
                "   {}  {:<16} {:>10} sats",
                tx.date.format("%Y-%m-%d %H:%M:%S"),
                tx.merchant,
                tx.amount_in_sats,
            );
        }
    }
}
