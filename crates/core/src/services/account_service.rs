use crate::models::account::{Account, AccountType};

/// Balance totals over a set of accounts.
///
/// Pure business logic, no I/O.
pub struct AccountService;

impl AccountService {
    pub fn new() -> Self {
        Self
    }

    /// Sum of all balances; liabilities reduce it.
    pub fn total_balance(&self, accounts: &[Account]) -> f64 {
        accounts.iter().map(|a| a.balance).sum()
    }

    /// Positive balances plus the stock portfolio value.
    /// Zero and negative balances are excluded.
    pub fn total_assets(&self, accounts: &[Account], stock_value: f64) -> f64 {
        self.cash_assets(accounts) + stock_value
    }

    /// Positive balances only.
    pub fn cash_assets(&self, accounts: &[Account]) -> f64 {
        accounts
            .iter()
            .filter(|a| a.is_asset())
            .map(|a| a.balance)
            .sum()
    }

    /// Magnitude of all negative balances. Never negative.
    pub fn total_debts(&self, accounts: &[Account]) -> f64 {
        accounts
            .iter()
            .filter(|a| a.is_liability())
            .map(|a| a.balance.abs())
            .sum()
    }

    pub fn find_account<'a>(&self, accounts: &'a [Account], id: &str) -> Option<&'a Account> {
        accounts.iter().find(|a| a.id == id)
    }

    /// Signed balance per account type, in `AccountType::ALL` order.
    /// Types without any account are left out.
    pub fn balances_by_type(&self, accounts: &[Account]) -> Vec<(AccountType, f64)> {
        AccountType::ALL
            .iter()
            .filter_map(|t| {
                let mut matching = accounts.iter().filter(|a| a.account_type == *t).peekable();
                matching.peek()?;
                Some((*t, matching.map(|a| a.balance).sum()))
            })
            .collect()
    }
}

impl Default for AccountService {
    fn default() -> Self {
        Self::new()
    }
}
