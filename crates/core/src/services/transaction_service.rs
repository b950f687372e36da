use crate::models::category::{CategoryShare, CategorySummary};
use crate::models::transaction::{Transaction, TransactionQuery, TransactionTotals, TransactionType};

/// Search/filter over transactions and spending breakdowns.
///
/// Results borrow from the input and keep its order; nothing is cached, so
/// every keystroke simply calls `filter` again.
pub struct TransactionService;

impl TransactionService {
    pub fn new() -> Self {
        Self
    }

    /// Transactions whose payee or category contains the search text
    /// (case-insensitive) and whose type passes the type filter.
    pub fn filter<'a>(&self, transactions: &'a [Transaction], query: &TransactionQuery) -> Vec<&'a Transaction> {
        transactions.iter().filter(|t| query.matches(t)).collect()
    }

    pub fn totals(&self, transactions: &[Transaction]) -> TransactionTotals {
        transactions
            .iter()
            .fold(TransactionTotals::default(), |mut acc, t| {
                match t.transaction_type {
                    TransactionType::Income => acc.income += t.amount,
                    TransactionType::Expense => acc.expense += t.amount,
                    TransactionType::Transfer => acc.transfer += t.amount,
                }
                acc
            })
    }

    /// Each category's share of total spending, in input order.
    pub fn category_shares(&self, categories: &[CategorySummary]) -> Vec<CategoryShare> {
        let total: f64 = categories.iter().map(|c| c.value).sum();
        categories
            .iter()
            .map(|c| CategoryShare {
                name: c.name.clone(),
                value: c.value,
                color: c.color.clone(),
                percent: if total > 0.0 {
                    (c.value / total) * 100.0
                } else {
                    0.0
                },
            })
            .collect()
    }
}

impl Default for TransactionService {
    fn default() -> Self {
        Self::new()
    }
}
