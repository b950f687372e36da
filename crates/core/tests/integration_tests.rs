use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use finance_dash_core::errors::CoreError;
use finance_dash_core::models::account::Account;
use finance_dash_core::models::budget::{Budget, BudgetStatus};
use finance_dash_core::models::category::CategorySummary;
use finance_dash_core::models::dataset::{Collection, Dataset};
use finance_dash_core::models::holding::StockHolding;
use finance_dash_core::models::net_worth::NetWorthPoint;
use finance_dash_core::models::settings::{NetWorthPolicy, ProviderDelays, Settings};
use finance_dash_core::models::transaction::{Transaction, TransactionType, TypeFilter};
use finance_dash_core::models::view_state::{LoadPhase, Tab};
use finance_dash_core::providers::static_data::StaticDataProvider;
use finance_dash_core::providers::traits::DataProvider;
use finance_dash_core::services::loader_service::LoaderService;
use finance_dash_core::FinanceDashboard;

// ═══════════════════════════════════════════════════════════════════
// Test Providers
// ═══════════════════════════════════════════════════════════════════

/// Serves a dataset, counts every call, and fails the listed collections.
struct ScriptedProvider {
    dataset: Dataset,
    failing: HashSet<Collection>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            failing: HashSet::new(),
            calls: AtomicUsize::new(0),
        }
    }

    fn mock() -> Self {
        Self::new(StaticDataProvider::mock_dataset().unwrap())
    }

    fn failing(mut self, collection: Collection) -> Self {
        self.failing.insert(collection);
        self
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn serve<T: Clone>(&self, collection: Collection, items: &[T]) -> Result<Vec<T>, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(&collection) {
            return Err(CoreError::Network(format!("{} unavailable", collection.path())));
        }
        Ok(items.to_vec())
    }
}

#[async_trait]
impl DataProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "Scripted"
    }

    async fn get_accounts(&self) -> Result<Vec<Account>, CoreError> {
        self.serve(Collection::Accounts, &self.dataset.accounts)
    }

    async fn get_transactions(&self) -> Result<Vec<Transaction>, CoreError> {
        self.serve(Collection::Transactions, &self.dataset.transactions)
    }

    async fn get_budgets(&self) -> Result<Vec<Budget>, CoreError> {
        self.serve(Collection::Budgets, &self.dataset.budgets)
    }

    async fn get_net_worth_history(&self) -> Result<Vec<NetWorthPoint>, CoreError> {
        self.serve(Collection::NetWorthHistory, &self.dataset.net_worth_history)
    }

    async fn get_spending_by_category(&self) -> Result<Vec<CategorySummary>, CoreError> {
        self.serve(Collection::SpendingByCategory, &self.dataset.spending_by_category)
    }

    async fn get_stocks(&self) -> Result<Vec<StockHolding>, CoreError> {
        self.serve(Collection::Stocks, &self.dataset.stocks)
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

async fn loaded_dashboard() -> FinanceDashboard {
    let mut dash = FinanceDashboard::default();
    dash.load(&ScriptedProvider::mock()).await.unwrap();
    dash
}

// ═══════════════════════════════════════════════════════════════════
// Loading
// ═══════════════════════════════════════════════════════════════════

mod loading {
    use super::*;

    #[tokio::test]
    async fn successful_load_populates_all_collections() {
        let provider = ScriptedProvider::mock();
        let mut dash = FinanceDashboard::default();
        assert!(dash.is_loading());

        dash.load(&provider).await.unwrap();

        assert!(!dash.is_loading());
        assert_eq!(dash.load_phase(), &LoadPhase::Ready);
        assert_eq!(provider.calls(), 6);
        let data = dash.data();
        assert_eq!(data.accounts.len(), 5);
        assert_eq!(data.transactions.len(), 12);
        assert_eq!(data.budgets.len(), 5);
        assert_eq!(data.net_worth_history.len(), 5);
        assert_eq!(data.spending_by_category.len(), 6);
        assert_eq!(data.stocks.len(), 5);
    }

    #[tokio::test]
    async fn second_load_issues_no_fetch() {
        let provider = ScriptedProvider::mock();
        let mut dash = FinanceDashboard::default();
        dash.load(&provider).await.unwrap();
        dash.select_tab(Tab::Budgets);
        dash.load(&provider).await.unwrap();
        assert_eq!(provider.calls(), 6);
        assert_eq!(dash.load_phase(), &LoadPhase::Ready);
    }

    #[tokio::test]
    async fn one_failure_leaves_every_collection_empty() {
        let provider = ScriptedProvider::mock().failing(Collection::Budgets);
        let mut dash = FinanceDashboard::default();

        let err = dash.load(&provider).await.unwrap_err();

        assert!(!dash.is_loading());
        assert!(dash.data().is_empty());
        assert_eq!(provider.calls(), 6);
        match err {
            CoreError::LoadFailure(f) => assert_eq!(f.failed_collections(), vec![Collection::Budgets]),
            other => panic!("expected LoadFailure, got {other:?}"),
        }
        assert!(matches!(dash.load_phase(), LoadPhase::Failed(_)));
    }

    #[tokio::test]
    async fn failure_names_every_failed_collection() {
        let provider = ScriptedProvider::mock()
            .failing(Collection::Stocks)
            .failing(Collection::Accounts);
        let mut dash = FinanceDashboard::default();
        let _ = dash.load(&provider).await;

        match dash.load_phase() {
            LoadPhase::Failed(f) => {
                assert_eq!(f.failed_collections(), vec![Collection::Accounts, Collection::Stocks]);
                assert!(f.failures[0].message.contains("accounts unavailable"));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn failed_dashboard_still_renders_zeroes() {
        let provider = ScriptedProvider::mock().failing(Collection::Transactions);
        let mut dash = FinanceDashboard::default();
        let _ = dash.load(&provider).await;

        let summary = dash.dashboard_summary();
        assert_eq!(summary.net_worth, 0.0);
        assert_eq!(summary.total_debts, 0.0);
        assert!(summary.net_worth_change.is_none());
        assert!(dash.filtered_transactions().is_empty());
        assert!(dash.budget_report().is_empty());
        assert_eq!(dash.portfolio_summary().gain.percent, 0.0);
    }

    #[tokio::test]
    async fn failed_load_is_not_retried() {
        let provider = ScriptedProvider::mock().failing(Collection::Budgets);
        let mut dash = FinanceDashboard::default();
        assert!(dash.load(&provider).await.is_err());
        assert!(dash.load(&provider).await.is_ok());
        assert_eq!(provider.calls(), 6);
    }

    #[tokio::test(start_paused = true)]
    async fn collections_are_fetched_concurrently() {
        let provider = StaticDataProvider::mock().unwrap();
        let mut dash = FinanceDashboard::default();

        let start = tokio::time::Instant::now();
        dash.load(&provider).await.unwrap();
        let elapsed = start.elapsed();

        // Sequential fetching would take 3.5 s; together they settle with the slowest.
        assert!(elapsed >= ProviderDelays::default().longest());
        assert!(elapsed < Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn invalid_budget_fails_the_budget_collection() {
        let mut ds = StaticDataProvider::mock_dataset().unwrap();
        ds.budgets.push(Budget::monthly("6", "Broken", -10.0, 0.0));
        let provider = ScriptedProvider::new(ds);

        let result = LoaderService::new()
            .load_all(&provider, NetWorthPolicy::Recompute)
            .await;

        let failure = result.unwrap_err();
        assert_eq!(failure.failed_collections(), vec![Collection::Budgets]);
        assert!(failure.failures[0].message.contains("Broken"));
    }

    #[tokio::test]
    async fn negative_shares_fail_the_stock_collection() {
        let mut ds = StaticDataProvider::mock_dataset().unwrap();
        ds.stocks.push(StockHolding::new("SHORT", "Short", -5.0, 10.0, 10.0, 0.0));
        let provider = ScriptedProvider::new(ds);

        let failure = LoaderService::new()
            .load_all(&provider, NetWorthPolicy::Recompute)
            .await
            .unwrap_err();
        assert_eq!(failure.failed_collections(), vec![Collection::Stocks]);
    }

    #[tokio::test]
    async fn inconsistent_history_under_reject_policy() {
        let mut ds = StaticDataProvider::mock_dataset().unwrap();
        ds.net_worth_history[2].net_worth += 1000.0;
        let provider = ScriptedProvider::new(ds);

        let settings = Settings {
            net_worth_policy: NetWorthPolicy::Reject,
            ..Settings::default()
        };
        let mut dash = FinanceDashboard::new(settings);
        let err = dash.load(&provider).await.unwrap_err();

        match err {
            CoreError::LoadFailure(f) => {
                assert_eq!(f.failed_collections(), vec![Collection::NetWorthHistory]);
                assert!(f.failures[0].message.contains("Aug"));
            }
            other => panic!("expected LoadFailure, got {other:?}"),
        }
        assert!(dash.data().is_empty());
    }

    #[tokio::test]
    async fn inconsistent_history_under_recompute_policy() {
        let mut ds = StaticDataProvider::mock_dataset().unwrap();
        ds.net_worth_history[2].net_worth += 1000.0;
        let provider = ScriptedProvider::new(ds);

        let mut dash = FinanceDashboard::default();
        dash.load(&provider).await.unwrap();
        assert_eq!(dash.data().net_worth_history[2].net_worth, 104000.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Derived figures on the demo dataset
// ═══════════════════════════════════════════════════════════════════

mod figures {
    use super::*;

    #[tokio::test]
    async fn dashboard_cards() {
        let dash = loaded_dashboard().await;
        let s = dash.dashboard_summary();
        assert!(approx(s.stock_value, 65621.0));
        assert!(approx(s.net_worth, 95751.30));
        assert!(approx(s.cash_assets, 31370.50));
        assert!(approx(s.total_assets, 96991.50));
        assert!(approx(s.total_debts, 1240.20));
        assert!(approx(s.net_worth_change.unwrap().absolute, 9630.0));
        assert_eq!(dash.format_amount(s.net_worth), "$95,751.30");
    }

    #[tokio::test]
    async fn investments_screen() {
        let dash = loaded_dashboard().await;
        let p = dash.portfolio_summary();
        assert!(approx(p.total_value, 65621.0));
        assert!(approx(p.total_cost, 58365.0));
        assert!(approx(p.gain.absolute, 7256.0));
        assert_eq!(p.top_performer.as_deref(), Some("AAPL"));
        assert_eq!(p.holdings.len(), 5);
    }

    #[tokio::test]
    async fn budgets_screen() {
        let dash = loaded_dashboard().await;
        let statuses: Vec<BudgetStatus> = dash.budget_report().iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![
                BudgetStatus::OnTrack,
                BudgetStatus::NearLimit,
                BudgetStatus::WellWithin,
                BudgetStatus::OnTrack,
                BudgetStatus::WellWithin,
            ]
        );
        let totals = dash.budget_totals();
        assert_eq!(totals.over_count, 0);
        assert!(approx(totals.limit, 1600.0));
    }

    #[tokio::test]
    async fn transaction_account_lookup() {
        let dash = loaded_dashboard().await;
        let salary = dash.data().transactions.iter().find(|t| t.id == "3").unwrap();
        assert_eq!(dash.account_for(salary).map(|a| a.name.as_str()), Some("Chase Checking"));
        assert!(approx(dash.transaction_totals().income, 4200.0));
        assert_eq!(dash.category_shares().len(), 6);
    }
}

// ═══════════════════════════════════════════════════════════════════
// View state transitions
// ═══════════════════════════════════════════════════════════════════

mod view_state {
    use super::*;

    #[tokio::test]
    async fn search_and_filter_recompute_on_each_update() {
        let mut dash = loaded_dashboard().await;
        assert_eq!(dash.filtered_transactions().len(), 12);

        dash.set_search("s");
        let broad = dash.filtered_transactions().len();
        dash.set_search("st");
        let narrower = dash.filtered_transactions().len();
        dash.set_search("star");
        assert!(broad >= narrower);
        assert_eq!(dash.filtered_transactions().len(), 1);

        dash.set_search("");
        dash.set_type_filter(TypeFilter::Only(TransactionType::Income));
        let income = dash.filtered_transactions();
        assert_eq!(income.len(), 1);
        assert_eq!(income[0].payee, "Tech Corp Inc.");
    }

    #[tokio::test]
    async fn snapshots_are_not_mutated_by_updates() {
        let mut dash = loaded_dashboard().await;
        let before = dash.state().clone();
        dash.set_search("uber");
        dash.select_tab(Tab::Transactions);
        assert_eq!(before.transaction_query.search, "");
        assert_eq!(before.tab, Tab::Dashboard);
        assert_eq!(dash.state().transaction_query.search, "uber");
    }

    #[test]
    fn selecting_a_tab_closes_the_sidebar() {
        let mut dash = FinanceDashboard::default();
        dash.toggle_sidebar();
        assert!(dash.state().sidebar_open);
        dash.select_tab(Tab::Investments);
        assert_eq!(dash.active_tab(), Tab::Investments);
        assert!(!dash.state().sidebar_open);
    }

    #[test]
    fn unknown_tab_id_falls_back_to_dashboard() {
        let mut dash = FinanceDashboard::default();
        assert_eq!(dash.select_tab_by_id("accounts"), Tab::Accounts);
        assert_eq!(dash.select_tab_by_id("reports"), Tab::Dashboard);
        assert_eq!(dash.active_tab(), Tab::Dashboard);
    }

    #[test]
    fn sidebar_toggle() {
        let mut dash = FinanceDashboard::default();
        dash.set_sidebar_open(true);
        dash.toggle_sidebar();
        assert!(!dash.state().sidebar_open);
    }
}
