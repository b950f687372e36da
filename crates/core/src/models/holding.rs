use serde::{Deserialize, Serialize};

/// A position in a single stock or ETF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockHolding {
    /// Ticker, uppercased (e.g., "AAPL")
    pub symbol: String,

    pub name: String,

    pub shares: f64,

    /// Average purchase price per share
    pub avg_cost: f64,

    pub current_price: f64,

    /// 24h price change, in percent
    #[serde(rename = "change24h")]
    pub change_24h: f64,
}

impl StockHolding {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        shares: f64,
        avg_cost: f64,
        current_price: f64,
        change_24h: f64,
    ) -> Self {
        Self {
            symbol: symbol.into().to_uppercase(),
            name: name.into(),
            shares,
            avg_cost,
            current_price,
            change_24h,
        }
    }

    /// shares × current price
    pub fn market_value(&self) -> f64 {
        self.shares * self.current_price
    }

    /// shares × average cost
    pub fn cost_basis(&self) -> f64 {
        self.shares * self.avg_cost
    }
}
