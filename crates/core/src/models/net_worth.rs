use serde::{Deserialize, Serialize};

/// Absolute tolerance used when checking `net_worth == assets - debts`.
pub const NET_WORTH_TOLERANCE: f64 = 0.005;

/// One point of the net-worth history chart.
///
/// `net_worth` arrives from the provider and is not trusted: the loader
/// checks it against `assets - debts` before the point is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthPoint {
    /// Period label (e.g., "Oct")
    pub date: String,
    pub assets: f64,
    pub debts: f64,
    pub net_worth: f64,
}

impl NetWorthPoint {
    /// Build a point whose net worth is derived from its own fields.
    pub fn new(date: impl Into<String>, assets: f64, debts: f64) -> Self {
        Self {
            date: date.into(),
            assets,
            debts,
            net_worth: assets - debts,
        }
    }

    pub fn expected_net_worth(&self) -> f64 {
        self.assets - self.debts
    }

    pub fn is_consistent(&self) -> bool {
        (self.net_worth - self.expected_net_worth()).abs() <= NET_WORTH_TOLERANCE
    }
}

/// Change between the first and last point of a history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetWorthChange {
    pub absolute: f64,
    /// Relative to the first point; 0 when the first net worth is 0
    pub percent: f64,
}
