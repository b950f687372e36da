use crate::models::analytics::{HoldingSummary, PortfolioGain, PortfolioSummary};
use crate::models::holding::StockHolding;

/// Computes portfolio analytics: value, cost basis, gain/loss, allocation.
///
/// All figures come from the holdings themselves (current price and
/// average cost); nothing is fetched.
pub struct InvestmentService;

impl InvestmentService {
    pub fn new() -> Self {
        Self
    }

    pub fn market_value(&self, holding: &StockHolding) -> f64 {
        holding.market_value()
    }

    pub fn cost_basis(&self, holding: &StockHolding) -> f64 {
        holding.cost_basis()
    }

    /// Σ shares × current price.
    pub fn portfolio_value(&self, holdings: &[StockHolding]) -> f64 {
        holdings.iter().map(|h| h.market_value()).sum()
    }

    /// Σ shares × average cost.
    pub fn portfolio_cost(&self, holdings: &[StockHolding]) -> f64 {
        holdings.iter().map(|h| h.cost_basis()).sum()
    }

    /// Absolute and percentage gain. The percentage is 0 when there is no
    /// cost basis, so an empty portfolio never reports NaN.
    pub fn portfolio_gain(&self, holdings: &[StockHolding]) -> PortfolioGain {
        let value = self.portfolio_value(holdings);
        let cost = self.portfolio_cost(holdings);
        Self::gain(value, cost)
    }

    /// Holding with the highest 24h change. Ties go to the earliest holding.
    pub fn top_performer<'a>(&self, holdings: &'a [StockHolding]) -> Option<&'a StockHolding> {
        holdings.iter().fold(None::<&StockHolding>, |best, h| match best {
            Some(b) if h.change_24h <= b.change_24h => Some(b),
            _ => Some(h),
        })
    }

    /// Per-holding breakdown in input order.
    pub fn holding_summaries(&self, holdings: &[StockHolding]) -> Vec<HoldingSummary> {
        let total_value = self.portfolio_value(holdings);

        holdings
            .iter()
            .map(|h| {
                let market_value = h.market_value();
                let cost_basis = h.cost_basis();
                let gain = Self::gain(market_value, cost_basis);
                HoldingSummary {
                    symbol: h.symbol.clone(),
                    shares: h.shares,
                    market_value,
                    cost_basis,
                    gain_loss: gain.absolute,
                    return_pct: gain.percent,
                    allocation_pct: if total_value > 0.0 {
                        (market_value / total_value) * 100.0
                    } else {
                        0.0
                    },
                    change_24h: h.change_24h,
                }
            })
            .collect()
    }

    /// Full portfolio summary for the investments screen.
    pub fn portfolio_summary(&self, holdings: &[StockHolding]) -> PortfolioSummary {
        PortfolioSummary {
            total_value: self.portfolio_value(holdings),
            total_cost: self.portfolio_cost(holdings),
            gain: self.portfolio_gain(holdings),
            top_performer: self.top_performer(holdings).map(|h| h.symbol.clone()),
            holdings: self.holding_summaries(holdings),
        }
    }

    fn gain(value: f64, cost: f64) -> PortfolioGain {
        let absolute = value - cost;
        let percent = if cost > 0.0 {
            (absolute / cost) * 100.0
        } else {
            0.0
        };
        PortfolioGain { absolute, percent }
    }
}

impl Default for InvestmentService {
    fn default() -> Self {
        Self::new()
    }
}
