use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::account::Account;
use crate::models::budget::Budget;
use crate::models::category::CategorySummary;
use crate::models::holding::StockHolding;
use crate::models::net_worth::NetWorthPoint;
use crate::models::transaction::Transaction;

/// Source of the six dashboard collections.
///
/// The calls take no arguments and have no ordering dependency, so a
/// caller may issue all of them at once. Swapping the in-memory dataset for
/// a real backend means writing one more implementation of this trait.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait DataProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    async fn get_accounts(&self) -> Result<Vec<Account>, CoreError>;

    async fn get_transactions(&self) -> Result<Vec<Transaction>, CoreError>;

    async fn get_budgets(&self) -> Result<Vec<Budget>, CoreError>;

    async fn get_net_worth_history(&self) -> Result<Vec<NetWorthPoint>, CoreError>;

    async fn get_spending_by_category(&self) -> Result<Vec<CategorySummary>, CoreError>;

    async fn get_stocks(&self) -> Result<Vec<StockHolding>, CoreError>;
}
