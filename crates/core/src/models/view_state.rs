use std::str::FromStr;
use std::sync::Arc;

use crate::errors::CoreError;

use super::dataset::{Dataset, LoadFailure};
use super::transaction::TransactionQuery;

/// Screens reachable from the sidebar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Dashboard,
    Transactions,
    Accounts,
    Investments,
    Budgets,
    Import,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Tab::Dashboard,
        Tab::Transactions,
        Tab::Accounts,
        Tab::Investments,
        Tab::Budgets,
        Tab::Import,
        Tab::Settings,
    ];

    /// Stable lowercase identifier (e.g., "investments").
    pub fn id(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Transactions => "transactions",
            Tab::Accounts => "accounts",
            Tab::Investments => "investments",
            Tab::Budgets => "budgets",
            Tab::Import => "import",
            Tab::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Transactions => "Transactions",
            Tab::Accounts => "Accounts",
            Tab::Investments => "Investments",
            Tab::Budgets => "Budgets",
            Tab::Import => "Import Data",
            Tab::Settings => "Settings",
        }
    }
}

impl FromStr for Tab {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .iter()
            .copied()
            .find(|t| t.id() == s.trim())
            .ok_or_else(|| CoreError::UnknownTab(s.to_string()))
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Where the one-shot startup load stands.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadPhase {
    /// Not settled yet; the UI shows a spinner
    #[default]
    Pending,
    Ready,
    /// Settled with at least one failed collection; data stays empty
    Failed(LoadFailure),
}

/// Snapshot of everything the views render from.
///
/// Every update produces a new value; nothing is mutated in place. The
/// dataset sits behind an `Arc`, so snapshots are cheap to produce on
/// every keystroke.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub tab: Tab,
    pub sidebar_open: bool,
    pub load: LoadPhase,
    pub data: Arc<Dataset>,
    pub transaction_query: TransactionQuery,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadPhase::Pending)
    }

    /// Switch screens. Picking a menu entry also closes the sidebar.
    #[must_use]
    pub fn with_tab(&self, tab: Tab) -> Self {
        Self {
            tab,
            sidebar_open: false,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_sidebar_open(&self, open: bool) -> Self {
        Self {
            sidebar_open: open,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_query(&self, query: TransactionQuery) -> Self {
        Self {
            transaction_query: query,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn loaded(&self, data: Dataset) -> Self {
        Self {
            load: LoadPhase::Ready,
            data: Arc::new(data),
            ..self.clone()
        }
    }

    /// Settle with a failure; every collection is reset to empty.
    #[must_use]
    pub fn failed(&self, failure: LoadFailure) -> Self {
        Self {
            load: LoadPhase::Failed(failure),
            data: Arc::new(Dataset::default()),
            ..self.clone()
        }
    }
}
