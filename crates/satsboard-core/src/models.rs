//! Domain models for satsboard

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display name used for the unassigned merchant bucket
pub const UNASSIGNED_MERCHANT: &str = "Other";

/// Settlement status of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TxStatus {
    Failure,
    Pending,
    Success,
}

/// Direction of value flow relative to the merchant wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TxDirection {
    Receive,
    Send,
}

/// Currency a transaction settled in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum WalletCurrency {
    #[default]
    Btc,
    Usd,
}

/// Exchange price attached to a transaction by the Galoy API.
///
/// Carried through verbatim; the report itself only uses `settlement_amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementPrice {
    pub base: i64,
    pub offset: i64,
    pub currency_unit: String,
    pub formatted_amount: String,
}

/// A single transaction as returned by the Galoy payments API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub status: TxStatus,
    pub direction: TxDirection,
    #[serde(default)]
    pub memo: Option<String>,
    /// Unix timestamp in seconds
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    /// Magnitude of value moved, in the smallest unit of the settlement
    /// currency (sats when the currency is BTC)
    pub settlement_amount: i64,
    #[serde(default)]
    pub settlement_fee: i64,
    #[serde(default)]
    pub settlement_currency: WalletCurrency,
    #[serde(default)]
    pub settlement_price: Option<SettlementPrice>,
}

/// Resolved merchant identity for a transaction.
///
/// A typed sentinel keeps the unassigned bucket unambiguous even if a real
/// merchant is ever configured with the display name "Other".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MerchantName {
    Named(String),
    Unassigned,
}

impl MerchantName {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Unassigned => UNASSIGNED_MERCHANT,
        }
    }
}

impl std::fmt::Display for MerchantName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Mapping from payment memo to merchant display name.
///
/// Memo keys are unique; several memos may map to the same display name.
/// The declared display names keep their first-seen order so every merchant
/// gets a bucket in a stable position, even with zero transactions.
#[derive(Debug, Clone, Default)]
pub struct MerchantMap {
    by_memo: HashMap<String, String>,
    merchants: Vec<String>,
}

impl MerchantMap {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = Self::default();
        for (memo, merchant) in entries {
            map.insert(memo.into(), merchant.into());
        }
        map
    }

    /// Add a memo -> merchant entry, declaring the merchant if new
    pub fn insert(&mut self, memo: String, merchant: String) {
        if !self.merchants.contains(&merchant) {
            self.merchants.push(merchant.clone());
        }
        self.by_memo.insert(memo, merchant);
    }

    /// Resolve a transaction memo to a merchant name.
    ///
    /// An absent memo, or one with no mapping entry, resolves to the
    /// unassigned sentinel rather than being dropped.
    pub fn resolve(&self, memo: Option<&str>) -> MerchantName {
        match memo.and_then(|m| self.by_memo.get(m)) {
            Some(merchant) => MerchantName::Named(merchant.clone()),
            None => MerchantName::Unassigned,
        }
    }

    /// Declared merchant display names, in declaration order
    pub fn merchants(&self) -> &[String] {
        &self.merchants
    }

    pub fn is_empty(&self) -> bool {
        self.by_memo.is_empty()
    }
}

/// Aggregate numeric fields shared by per-merchant and global stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantStats {
    pub name: String,
    pub sats_spent: i64,
    pub tx_count: i64,
    /// 0 when the merchant has no eligible transactions
    pub avg_tx_amount_in_sats: i64,
    pub max_tx_amount_in_sats: i64,
    /// 0 when the merchant has no eligible transactions; excluded from the
    /// global minimum in that case
    pub min_tx_amount_in_sats: i64,
    pub recent_txs: Vec<RecentTx>,
}

/// One entry of a merchant's recent-transactions window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentTx {
    pub amount_in_sats: i64,
    pub date: DateTime<Utc>,
}

/// One entry of the global recent-transactions window, tagged with the
/// merchant it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxSummary {
    pub merchant: String,
    pub amount_in_sats: i64,
    pub date: DateTime<Utc>,
}

/// Report root served to the dashboard front-end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatsSummary {
    pub sats_spent: i64,
    pub tx_count: i64,
    pub avg_tx_amount_in_sats: i64,
    pub max_tx_amount_in_sats: i64,
    pub min_tx_amount_in_sats: i64,
    pub merchant_stats: Vec<MerchantStats>,
    pub recent_txs: Vec<TxSummary>,
}
