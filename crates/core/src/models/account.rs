use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The kind of account. Credit cards carry negative balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    Checking,
    Savings,
    #[serde(rename = "Credit Card")]
    CreditCard,
    Investment,
    Cash,
}

impl AccountType {
    /// All account types in display order.
    pub const ALL: [AccountType; 5] = [
        AccountType::Checking,
        AccountType::Savings,
        AccountType::CreditCard,
        AccountType::Investment,
        AccountType::Cash,
    ];
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountType::Checking => write!(f, "Checking"),
            AccountType::Savings => write!(f, "Savings"),
            AccountType::CreditCard => write!(f, "Credit Card"),
            AccountType::Investment => write!(f, "Investment"),
            AccountType::Cash => write!(f, "Cash"),
        }
    }
}

/// A bank, card, brokerage or cash account.
///
/// The sign of `balance` encodes what the account is: positive balances are
/// assets, negative balances are liabilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Signed balance in `currency`
    pub balance: f64,

    /// ISO currency code (e.g., "USD")
    pub currency: String,

    pub last_updated: NaiveDate,
}

impl Account {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        account_type: AccountType,
        balance: f64,
        last_updated: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            account_type,
            balance,
            currency: "USD".to_string(),
            last_updated,
        }
    }

    pub fn is_asset(&self) -> bool {
        self.balance > 0.0
    }

    pub fn is_liability(&self) -> bool {
        self.balance < 0.0
    }
}
