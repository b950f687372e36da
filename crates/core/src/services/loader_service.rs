use crate::errors::CoreError;
use crate::models::budget::Budget;
use crate::models::dataset::{Collection, Dataset, LoadFailure};
use crate::models::holding::StockHolding;
use crate::models::settings::NetWorthPolicy;
use crate::models::transaction::Transaction;
use crate::providers::traits::DataProvider;
use crate::services::net_worth_service::NetWorthService;

/// Loads all six collections from a `DataProvider` at once.
///
/// The calls are issued together on the current task and awaited as a
/// group: the load settles only when every call has settled. A single
/// failure fails the whole load; nothing is retried and no partial result
/// is kept. Unlike a bare all-or-nothing join, the returned `LoadFailure`
/// names every collection that failed.
pub struct LoaderService {
    net_worth_service: NetWorthService,
}

impl LoaderService {
    pub fn new() -> Self {
        Self {
            net_worth_service: NetWorthService::new(),
        }
    }

    pub async fn load_all(
        &self,
        provider: &dyn DataProvider,
        policy: NetWorthPolicy,
    ) -> Result<Dataset, LoadFailure> {
        tracing::debug!("loading all collections from {}", provider.name());

        let (accounts, transactions, budgets, history, categories, stocks) = tokio::join!(
            provider.get_accounts(),
            provider.get_transactions(),
            provider.get_budgets(),
            provider.get_net_worth_history(),
            provider.get_spending_by_category(),
            provider.get_stocks(),
        );

        let mut failure = LoadFailure::default();

        let accounts = Self::settle(&mut failure, Collection::Accounts, accounts);
        let transactions = Self::settle(
            &mut failure,
            Collection::Transactions,
            transactions.and_then(Self::validate_transactions),
        );
        let budgets = Self::settle(
            &mut failure,
            Collection::Budgets,
            budgets.and_then(Self::validate_budgets),
        );
        let history = Self::settle(
            &mut failure,
            Collection::NetWorthHistory,
            history.and_then(|points| self.net_worth_service.validate_history(points, policy)),
        );
        let categories = Self::settle(&mut failure, Collection::SpendingByCategory, categories);
        let stocks = Self::settle(
            &mut failure,
            Collection::Stocks,
            stocks.and_then(Self::validate_holdings),
        );

        if !failure.is_empty() {
            return Err(failure);
        }

        let dataset = Dataset {
            accounts,
            transactions,
            budgets,
            net_worth_history: history,
            spending_by_category: categories,
            stocks,
        };

        tracing::info!(
            "loaded {} accounts, {} transactions, {} budgets, {} history points, {} categories, {} holdings from {}",
            dataset.accounts.len(),
            dataset.transactions.len(),
            dataset.budgets.len(),
            dataset.net_worth_history.len(),
            dataset.spending_by_category.len(),
            dataset.stocks.len(),
            provider.name()
        );

        Ok(dataset)
    }

    fn settle<T>(
        failure: &mut LoadFailure,
        collection: Collection,
        result: Result<Vec<T>, CoreError>,
    ) -> Vec<T> {
        match result {
            Ok(items) => items,
            Err(e) => {
                tracing::error!("failed to load {collection}: {e}");
                failure.push(collection, e.to_string());
                Vec::new()
            }
        }
    }

    fn validate_transactions(transactions: Vec<Transaction>) -> Result<Vec<Transaction>, CoreError> {
        if let Some(t) = transactions
            .iter()
            .find(|t| !t.amount.is_finite() || t.amount < 0.0)
        {
            return Err(CoreError::ValidationError(format!(
                "transaction '{}' has invalid amount {}",
                t.id, t.amount
            )));
        }
        Ok(transactions)
    }

    fn validate_budgets(budgets: Vec<Budget>) -> Result<Vec<Budget>, CoreError> {
        let invalid = |v: f64| !v.is_finite() || v < 0.0;
        if let Some(b) = budgets.iter().find(|b| invalid(b.limit) || invalid(b.spent)) {
            return Err(CoreError::ValidationError(format!(
                "budget '{}' must have non-negative limit and spent (limit {}, spent {})",
                b.category, b.limit, b.spent
            )));
        }
        Ok(budgets)
    }

    fn validate_holdings(holdings: Vec<StockHolding>) -> Result<Vec<StockHolding>, CoreError> {
        let invalid = |v: f64| !v.is_finite() || v < 0.0;
        if let Some(h) = holdings.iter().find(|h| {
            invalid(h.shares) || invalid(h.avg_cost) || invalid(h.current_price) || !h.change_24h.is_finite()
        }) {
            return Err(CoreError::ValidationError(format!(
                "holding '{}' has negative or non-finite figures",
                h.symbol
            )));
        }
        Ok(holdings)
    }
}

impl Default for LoaderService {
    fn default() -> Self {
        Self::new()
    }
}
