pub mod config;
pub mod errors;
pub mod format;
pub mod models;
pub mod providers;
pub mod services;
pub mod telemetry;

use models::{
    account::Account,
    analytics::{DashboardSummary, PortfolioSummary},
    budget::{BudgetReport, BudgetTotals},
    category::CategoryShare,
    dataset::Dataset,
    settings::Settings,
    transaction::{Transaction, TransactionQuery, TransactionTotals, TypeFilter},
    view_state::{LoadPhase, Tab, ViewState},
};
use providers::traits::DataProvider;
use services::{
    account_service::AccountService, budget_service::BudgetService,
    investment_service::InvestmentService, loader_service::LoaderService,
    net_worth_service::NetWorthService, transaction_service::TransactionService,
};

use errors::CoreError;

/// Main entry point for the FinanceDash core library.
///
/// Owns the current `ViewState` snapshot and the services that derive
/// figures from it. Each update swaps in a new snapshot; derived figures
/// are recomputed from the current one on every call.
#[must_use]
pub struct FinanceDashboard {
    state: ViewState,
    settings: Settings,
    account_service: AccountService,
    budget_service: BudgetService,
    investment_service: InvestmentService,
    loader_service: LoaderService,
    net_worth_service: NetWorthService,
    transaction_service: TransactionService,
}

impl std::fmt::Debug for FinanceDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinanceDashboard")
            .field("tab", &self.state.tab)
            .field("sidebar_open", &self.state.sidebar_open)
            .field("load", &self.state.load)
            .field("accounts", &self.state.data.accounts.len())
            .field("transactions", &self.state.data.transactions.len())
            .field("settings", &self.settings)
            .finish()
    }
}

impl Default for FinanceDashboard {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl FinanceDashboard {
    /// A dashboard that has not loaded yet (`is_loading()` is true).
    pub fn new(settings: Settings) -> Self {
        Self {
            state: ViewState::new(),
            settings,
            account_service: AccountService::new(),
            budget_service: BudgetService::new(),
            investment_service: InvestmentService::new(),
            loader_service: LoaderService::new(),
            net_worth_service: NetWorthService::new(),
            transaction_service: TransactionService::new(),
        }
    }

    // ── Loading ─────────────────────────────────────────────────────

    /// Run the one-shot startup load.
    ///
    /// All six collections are requested at once. On success the state
    /// becomes `Ready`. If anything fails the failure is logged, every
    /// collection stays empty, the state becomes `Failed`, and the failure
    /// is returned. Either way loading is over: later calls return `Ok(())`
    /// without touching the provider.
    pub async fn load(&mut self, provider: &dyn DataProvider) -> Result<(), CoreError> {
        if !self.state.is_loading() {
            tracing::debug!("load already settled, skipping fetch");
            return Ok(());
        }

        match self
            .loader_service
            .load_all(provider, self.settings.net_worth_policy)
            .await
        {
            Ok(dataset) => {
                self.state = self.state.loaded(dataset);
                Ok(())
            }
            Err(failure) => {
                tracing::error!("Failed to load data: {failure}");
                self.state = self.state.failed(failure.clone());
                Err(CoreError::LoadFailure(failure))
            }
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    #[must_use]
    pub fn load_phase(&self) -> &LoadPhase {
        &self.state.load
    }

    /// Current snapshot. Clone it to keep it across updates.
    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn data(&self) -> &Dataset {
        &self.state.data
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ── Navigation ──────────────────────────────────────────────────

    pub fn select_tab(&mut self, tab: Tab) {
        self.state = self.state.with_tab(tab);
    }

    /// Select a tab by its id. Unknown ids fall back to the dashboard.
    pub fn select_tab_by_id(&mut self, id: &str) -> Tab {
        let tab = id.parse::<Tab>().unwrap_or_else(|e: CoreError| {
            tracing::warn!("{e}, showing dashboard");
            Tab::Dashboard
        });
        self.select_tab(tab);
        tab
    }

    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.state.tab
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.state = self.state.with_sidebar_open(open);
    }

    pub fn toggle_sidebar(&mut self) {
        self.set_sidebar_open(!self.state.sidebar_open);
    }

    // ── Transactions ────────────────────────────────────────────────

    pub fn set_search(&mut self, search: impl Into<String>) {
        let query = TransactionQuery {
            search: search.into(),
            ..self.state.transaction_query.clone()
        };
        self.state = self.state.with_query(query);
    }

    pub fn set_type_filter(&mut self, type_filter: TypeFilter) {
        let query = TransactionQuery {
            type_filter,
            ..self.state.transaction_query.clone()
        };
        self.state = self.state.with_query(query);
    }

    /// Transactions matching the current search and type filter.
    #[must_use]
    pub fn filtered_transactions(&self) -> Vec<&Transaction> {
        self.transaction_service
            .filter(&self.state.data.transactions, &self.state.transaction_query)
    }

    #[must_use]
    pub fn transaction_totals(&self) -> TransactionTotals {
        self.transaction_service.totals(&self.state.data.transactions)
    }

    /// The account a transaction points at, if it exists.
    #[must_use]
    pub fn account_for(&self, transaction: &Transaction) -> Option<&Account> {
        self.account_service
            .find_account(&self.state.data.accounts, &transaction.account_id)
    }

    // ── Derived figures ─────────────────────────────────────────────

    /// Figures for the dashboard's top cards.
    #[must_use]
    pub fn dashboard_summary(&self) -> DashboardSummary {
        let data = &self.state.data;
        let stock_value = self.investment_service.portfolio_value(&data.stocks);
        DashboardSummary {
            net_worth: self.net_worth_service.net_worth(&data.accounts, &data.stocks),
            total_assets: self.account_service.total_assets(&data.accounts, stock_value),
            cash_assets: self.account_service.cash_assets(&data.accounts),
            total_debts: self.account_service.total_debts(&data.accounts),
            stock_value,
            net_worth_change: self.net_worth_service.history_change(&data.net_worth_history),
        }
    }

    #[must_use]
    pub fn portfolio_summary(&self) -> PortfolioSummary {
        self.investment_service.portfolio_summary(&self.state.data.stocks)
    }

    #[must_use]
    pub fn budget_report(&self) -> Vec<BudgetReport> {
        self.budget_service.report(&self.state.data.budgets)
    }

    #[must_use]
    pub fn budget_totals(&self) -> BudgetTotals {
        self.budget_service.totals(&self.state.data.budgets)
    }

    /// Format an amount in the configured display currency.
    #[must_use]
    pub fn format_amount(&self, amount: f64) -> String {
        format::format_currency(amount, &self.settings.currency)
    }

    #[must_use]
    pub fn category_shares(&self) -> Vec<CategoryShare> {
        self.transaction_service
            .category_shares(&self.state.data.spending_by_category)
    }
}
