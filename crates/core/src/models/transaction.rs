use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CoreError;

/// Direction of a transaction. The stored amount is always a magnitude;
/// the sign shown to the user comes from this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    Income,
    Expense,
    Transfer,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Income => write!(f, "Income"),
            TransactionType::Expense => write!(f, "Expense"),
            TransactionType::Transfer => write!(f, "Transfer"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Posted,
    Pending,
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionStatus::Posted => write!(f, "posted"),
            TransactionStatus::Pending => write!(f, "pending"),
        }
    }
}

/// A single ledger line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,

    pub date: NaiveDate,

    /// Merchant or counterparty
    pub payee: String,

    /// Unsigned magnitude
    pub amount: f64,

    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    pub category: String,

    /// Weak reference to `Account::id`; never checked.
    pub account_id: String,

    pub status: TransactionStatus,
}

impl Transaction {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        payee: impl Into<String>,
        amount: f64,
        transaction_type: TransactionType,
        category: impl Into<String>,
        account_id: impl Into<String>,
        status: TransactionStatus,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            payee: payee.into(),
            amount,
            transaction_type,
            category: category.into(),
            account_id: account_id.into(),
            status,
        }
    }
}

/// Type selector of the transactions view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Only(TransactionType),
}

impl TypeFilter {
    pub fn matches(&self, transaction_type: TransactionType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(t) => *t == transaction_type,
        }
    }
}

impl From<TransactionType> for TypeFilter {
    fn from(t: TransactionType) -> Self {
        TypeFilter::Only(t)
    }
}

impl FromStr for TypeFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(TypeFilter::All),
            "income" => Ok(TypeFilter::Only(TransactionType::Income)),
            "expense" => Ok(TypeFilter::Only(TransactionType::Expense)),
            "transfer" => Ok(TypeFilter::Only(TransactionType::Transfer)),
            _ => Err(CoreError::InvalidFilter(s.to_string())),
        }
    }
}

impl std::fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeFilter::All => write!(f, "all"),
            TypeFilter::Only(t) => write!(f, "{t}"),
        }
    }
}

/// Search box text plus type selector. An empty search matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    pub search: String,
    pub type_filter: TypeFilter,
}

impl TransactionQuery {
    pub fn new(search: impl Into<String>, type_filter: TypeFilter) -> Self {
        Self {
            search: search.into(),
            type_filter,
        }
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || transaction.payee.to_lowercase().contains(&needle)
            || transaction.category.to_lowercase().contains(&needle);
        matches_search && self.type_filter.matches(transaction.transaction_type)
    }
}

/// Sums of transaction amounts per type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionTotals {
    pub income: f64,
    pub expense: f64,
    pub transfer: f64,
}
