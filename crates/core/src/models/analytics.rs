use serde::{Deserialize, Serialize};

use super::net_worth::NetWorthChange;

/// Unrealized gain of a set of holdings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioGain {
    /// value - cost
    pub absolute: f64,

    /// (value - cost) / cost × 100, or 0 when cost is 0
    pub percent: f64,
}

/// Summary of the whole stock portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Σ shares × current price
    pub total_value: f64,

    /// Σ shares × average cost
    pub total_cost: f64,

    pub gain: PortfolioGain,

    /// Symbol of the holding with the best 24h change, if any
    pub top_performer: Option<String>,

    /// Per-holding breakdown, in input order
    pub holdings: Vec<HoldingSummary>,
}

/// Summary of a single holding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoldingSummary {
    pub symbol: String,

    pub shares: f64,

    pub market_value: f64,

    pub cost_basis: f64,

    /// market_value - cost_basis
    pub gain_loss: f64,

    /// Percentage return on cost basis
    pub return_pct: f64,

    /// This holding's value / total portfolio value × 100
    pub allocation_pct: f64,

    pub change_24h: f64,
}

/// Figures shown on the dashboard's top cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Σ balances + stock value. Debts are already negative balances, so
    /// this is not `total_assets - total_debts`.
    pub net_worth: f64,

    /// Positive balances + stock value
    pub total_assets: f64,

    /// Positive balances only
    pub cash_assets: f64,

    /// Σ |negative balances|, informational
    pub total_debts: f64,

    pub stock_value: f64,

    /// First-to-last change of the net-worth history
    pub net_worth_change: Option<NetWorthChange>,
}
