use serde::{Deserialize, Serialize};

use super::account::Account;
use super::budget::Budget;
use super::category::CategorySummary;
use super::holding::StockHolding;
use super::net_worth::NetWorthPoint;
use super::transaction::Transaction;

/// The six collections a dashboard is built from.
///
/// Loaded once per session and never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dataset {
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub net_worth_history: Vec<NetWorthPoint>,
    pub spending_by_category: Vec<CategorySummary>,
    pub stocks: Vec<StockHolding>,
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
            && self.transactions.is_empty()
            && self.budgets.is_empty()
            && self.net_worth_history.is_empty()
            && self.spending_by_category.is_empty()
            && self.stocks.is_empty()
    }
}

/// Identifies one of the six collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collection {
    Accounts,
    Transactions,
    Budgets,
    NetWorthHistory,
    SpendingByCategory,
    Stocks,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Accounts,
        Collection::Transactions,
        Collection::Budgets,
        Collection::NetWorthHistory,
        Collection::SpendingByCategory,
        Collection::Stocks,
    ];

    /// Path segment used by HTTP providers.
    pub fn path(&self) -> &'static str {
        match self {
            Collection::Accounts => "accounts",
            Collection::Transactions => "transactions",
            Collection::Budgets => "budgets",
            Collection::NetWorthHistory => "net-worth-history",
            Collection::SpendingByCategory => "spending-by-category",
            Collection::Stocks => "stocks",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Collection::Accounts => write!(f, "accounts"),
            Collection::Transactions => write!(f, "transactions"),
            Collection::Budgets => write!(f, "budgets"),
            Collection::NetWorthHistory => write!(f, "net worth history"),
            Collection::SpendingByCategory => write!(f, "spending by category"),
            Collection::Stocks => write!(f, "stocks"),
        }
    }
}

/// Why one collection could not be loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionFailure {
    pub collection: Collection,
    pub message: String,
}

/// Aggregate failure of a load: every collection that failed, in
/// `Collection::ALL` order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadFailure {
    pub failures: Vec<CollectionFailure>,
}

impl LoadFailure {
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn push(&mut self, collection: Collection, message: impl Into<String>) {
        self.failures.push(CollectionFailure {
            collection,
            message: message.into(),
        });
    }

    pub fn failed_collections(&self) -> Vec<Collection> {
        self.failures.iter().map(|f| f.collection).collect()
    }
}

impl std::fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .failures
            .iter()
            .map(|fail| format!("{} ({})", fail.collection, fail.message))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}
