use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What to do with a net-worth point whose `net_worth` disagrees with
/// `assets - debts`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetWorthPolicy {
    /// Fail the net-worth collection
    Reject,
    /// Replace the stored figure with `assets - debts`
    #[default]
    Recompute,
}

/// Where the dashboard gets its records from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DataSource {
    /// The built-in fixed dataset
    #[default]
    Mock,
    /// A JSON API serving one endpoint per collection
    Http { base_url: String },
}

/// Artificial latency of each collection served by the in-memory provider,
/// in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderDelays {
    pub accounts: u64,
    pub transactions: u64,
    pub budgets: u64,
    pub net_worth_history: u64,
    pub spending_by_category: u64,
    pub stocks: u64,
}

impl ProviderDelays {
    /// No latency at all.
    pub fn none() -> Self {
        Self {
            accounts: 0,
            transactions: 0,
            budgets: 0,
            net_worth_history: 0,
            spending_by_category: 0,
            stocks: 0,
        }
    }

    /// The slowest collection determines when a full load settles.
    pub fn longest(&self) -> Duration {
        let ms = [
            self.accounts,
            self.transactions,
            self.budgets,
            self.net_worth_history,
            self.spending_by_category,
            self.stocks,
        ]
        .into_iter()
        .max()
        .unwrap_or(0);
        Duration::from_millis(ms)
    }
}

impl Default for ProviderDelays {
    fn default() -> Self {
        Self {
            accounts: 600,
            transactions: 500,
            budgets: 400,
            net_worth_history: 700,
            spending_by_category: 700,
            stocks: 600,
        }
    }
}

/// User-configurable settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display currency (e.g., "USD")
    pub currency: String,

    /// Tracing filter level (e.g., "info", "debug")
    pub log_level: String,

    pub net_worth_policy: NetWorthPolicy,

    pub data_source: DataSource,

    pub mock_delays_ms: ProviderDelays,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            log_level: "info".to_string(),
            net_worth_policy: NetWorthPolicy::default(),
            data_source: DataSource::default(),
            mock_delays_ms: ProviderDelays::default(),
        }
    }
}
