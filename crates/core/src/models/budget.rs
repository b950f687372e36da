use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetPeriod {
    Monthly,
    Yearly,
}

impl std::fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetPeriod::Monthly => write!(f, "Monthly"),
            BudgetPeriod::Yearly => write!(f, "Yearly"),
        }
    }
}

/// A spending limit for one category. `spent` may exceed `limit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: String,
    pub category: String,
    pub limit: f64,
    pub spent: f64,
    pub period: BudgetPeriod,
}

impl Budget {
    pub fn monthly(id: impl Into<String>, category: impl Into<String>, limit: f64, spent: f64) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            limit,
            spent,
            period: BudgetPeriod::Monthly,
        }
    }
}

/// How much of a budget has been consumed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetUtilization {
    /// Percentage used, clamped to `[0, 100]`
    pub percent: f64,

    /// `spent > limit`, tracked separately from the clamped percentage
    pub is_over: bool,

    /// `max(limit - spent, 0)`
    pub remaining: f64,
}

/// Display band of a budget, from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    /// Spending exceeded the limit
    Over,
    /// More than 80% used
    NearLimit,
    /// Between 50% and 80% used
    OnTrack,
    /// Under 50% used
    WellWithin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetReport {
    pub budget: Budget,
    pub utilization: BudgetUtilization,
    pub status: BudgetStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetTotals {
    pub limit: f64,
    pub spent: f64,
    pub over_count: usize,
}
