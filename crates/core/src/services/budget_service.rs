use crate::models::budget::{Budget, BudgetReport, BudgetStatus, BudgetTotals, BudgetUtilization};

/// Percentage above which a budget is flagged as close to its limit.
const NEAR_LIMIT_PCT: f64 = 80.0;

/// Percentage below which a budget is comfortably within its limit.
const WELL_WITHIN_PCT: f64 = 50.0;

/// Budget utilization and status bands.
pub struct BudgetService;

impl BudgetService {
    pub fn new() -> Self {
        Self
    }

    /// Clamped percentage used, over-limit flag and amount left.
    ///
    /// A zero limit counts as fully used once anything is spent, and as
    /// unused otherwise.
    pub fn utilization(&self, budget: &Budget) -> BudgetUtilization {
        let percent = if budget.limit > 0.0 {
            ((budget.spent / budget.limit) * 100.0).min(100.0)
        } else if budget.spent > 0.0 {
            100.0
        } else {
            0.0
        };

        BudgetUtilization {
            percent,
            is_over: budget.spent > budget.limit,
            remaining: (budget.limit - budget.spent).max(0.0),
        }
    }

    pub fn status(&self, utilization: &BudgetUtilization) -> BudgetStatus {
        if utilization.is_over {
            BudgetStatus::Over
        } else if utilization.percent > NEAR_LIMIT_PCT {
            BudgetStatus::NearLimit
        } else if utilization.percent < WELL_WITHIN_PCT {
            BudgetStatus::WellWithin
        } else {
            BudgetStatus::OnTrack
        }
    }

    pub fn report(&self, budgets: &[Budget]) -> Vec<BudgetReport> {
        budgets
            .iter()
            .map(|b| {
                let utilization = self.utilization(b);
                BudgetReport {
                    budget: b.clone(),
                    status: self.status(&utilization),
                    utilization,
                }
            })
            .collect()
    }

    pub fn totals(&self, budgets: &[Budget]) -> BudgetTotals {
        budgets.iter().fold(BudgetTotals::default(), |mut acc, b| {
            acc.limit += b.limit;
            acc.spent += b.spent;
            if b.spent > b.limit {
                acc.over_count += 1;
            }
            acc
        })
    }
}

impl Default for BudgetService {
    fn default() -> Self {
        Self::new()
    }
}
