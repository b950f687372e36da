use async_trait::async_trait;
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::account::Account;
use crate::models::budget::Budget;
use crate::models::category::CategorySummary;
use crate::models::dataset::Dataset;
use crate::models::holding::StockHolding;
use crate::models::net_worth::NetWorthPoint;
use crate::models::settings::ProviderDelays;
use crate::models::transaction::Transaction;
use super::traits::DataProvider;

/// FinanceDash demo data (five accounts, twelve October 2023 transactions,
/// five budgets, five months of history, six categories, five holdings).
const MOCK_DATASET: &str = include_str!("fixtures/mock_dataset.json");

/// Serves a fixed in-memory `Dataset`, each collection after its own delay.
///
/// Always succeeds. `mock()` reproduces the demo backend; `from_json` lets
/// a snapshot exported elsewhere be served the same way.
pub struct StaticDataProvider {
    dataset: Dataset,
    delays: ProviderDelays,
}

impl StaticDataProvider {
    pub fn new(dataset: Dataset, delays: ProviderDelays) -> Self {
        Self { dataset, delays }
    }

    /// The built-in demo dataset with its default latencies.
    pub fn mock() -> Result<Self, CoreError> {
        Ok(Self::new(Self::mock_dataset()?, ProviderDelays::default()))
    }

    /// The built-in demo dataset without any latency.
    pub fn mock_dataset() -> Result<Dataset, CoreError> {
        Ok(serde_json::from_str(MOCK_DATASET)?)
    }

    /// Serve a JSON snapshot of a `Dataset` with no latency.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let dataset: Dataset = serde_json::from_str(json)?;
        Ok(Self::new(dataset, ProviderDelays::none()))
    }

    #[must_use]
    pub fn with_delays(mut self, delays: ProviderDelays) -> Self {
        self.delays = delays;
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    async fn delay(ms: u64) {
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DataProvider for StaticDataProvider {
    fn name(&self) -> &str {
        "Static"
    }

    async fn get_accounts(&self) -> Result<Vec<Account>, CoreError> {
        Self::delay(self.delays.accounts).await;
        Ok(self.dataset.accounts.clone())
    }

    async fn get_transactions(&self) -> Result<Vec<Transaction>, CoreError> {
        Self::delay(self.delays.transactions).await;
        Ok(self.dataset.transactions.clone())
    }

    async fn get_budgets(&self) -> Result<Vec<Budget>, CoreError> {
        Self::delay(self.delays.budgets).await;
        Ok(self.dataset.budgets.clone())
    }

    async fn get_net_worth_history(&self) -> Result<Vec<NetWorthPoint>, CoreError> {
        Self::delay(self.delays.net_worth_history).await;
        Ok(self.dataset.net_worth_history.clone())
    }

    async fn get_spending_by_category(&self) -> Result<Vec<CategorySummary>, CoreError> {
        Self::delay(self.delays.spending_by_category).await;
        Ok(self.dataset.spending_by_category.clone())
    }

    async fn get_stocks(&self) -> Result<Vec<StockHolding>, CoreError> {
        Self::delay(self.delays.stocks).await;
        Ok(self.dataset.stocks.clone())
    }
}
