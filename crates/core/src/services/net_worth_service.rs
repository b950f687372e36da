use crate::errors::CoreError;
use crate::models::account::Account;
use crate::models::holding::StockHolding;
use crate::models::net_worth::{NetWorthChange, NetWorthPoint};
use crate::models::settings::NetWorthPolicy;

/// Net worth of the current snapshot, and checks on the provider's
/// net-worth history.
pub struct NetWorthService;

impl NetWorthService {
    pub fn new() -> Self {
        Self
    }

    /// Σ account balances + Σ shares × current price.
    ///
    /// Debts are already negative balances, so they are not subtracted a
    /// second time. Empty inputs contribute 0.
    pub fn net_worth(&self, accounts: &[Account], holdings: &[StockHolding]) -> f64 {
        let balances: f64 = accounts.iter().map(|a| a.balance).sum();
        let stocks: f64 = holdings.iter().map(|h| h.market_value()).sum();
        balances + stocks
    }

    /// Check every point against `assets - debts`.
    ///
    /// Under `Reject` the first inconsistent point fails the whole history.
    /// Under `Recompute` inconsistent points get their net worth rebuilt.
    pub fn validate_history(
        &self,
        points: Vec<NetWorthPoint>,
        policy: NetWorthPolicy,
    ) -> Result<Vec<NetWorthPoint>, CoreError> {
        points
            .into_iter()
            .map(|mut point| {
                if !point.assets.is_finite() || !point.debts.is_finite() {
                    return Err(CoreError::ValidationError(format!(
                        "net worth point '{}' has non-finite assets or debts",
                        point.date
                    )));
                }
                if point.is_consistent() {
                    return Ok(point);
                }
                let expected = point.expected_net_worth();
                match policy {
                    NetWorthPolicy::Reject => Err(CoreError::InconsistentNetWorth {
                        date: point.date,
                        expected,
                        actual: point.net_worth,
                    }),
                    NetWorthPolicy::Recompute => {
                        tracing::warn!(
                            "net worth for {} was {}, recomputed as {}",
                            point.date,
                            point.net_worth,
                            expected
                        );
                        point.net_worth = expected;
                        Ok(point)
                    }
                }
            })
            .collect()
    }

    /// Change from the first to the last point; `None` with fewer than two.
    pub fn history_change(&self, points: &[NetWorthPoint]) -> Option<NetWorthChange> {
        if points.len() < 2 {
            return None;
        }
        let first = points.first()?.net_worth;
        let last = points.last()?.net_worth;
        let absolute = last - first;
        let percent = if first != 0.0 {
            (absolute / first.abs()) * 100.0
        } else {
            0.0
        };
        Some(NetWorthChange { absolute, percent })
    }
}

impl Default for NetWorthService {
    fn default() -> Self {
        Self::new()
    }
}
