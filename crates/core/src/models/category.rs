use serde::{Deserialize, Serialize};

/// Spending in one category for the current period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub name: String,
    pub value: f64,
    /// Chart colour (e.g., "#10B981")
    pub color: String,
}

/// A category together with its share of total spending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub name: String,
    pub value: f64,
    pub color: String,
    pub percent: f64,
}
