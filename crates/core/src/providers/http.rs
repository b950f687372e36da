use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::account::Account;
use crate::models::budget::Budget;
use crate::models::category::CategorySummary;
use crate::models::dataset::Collection;
use crate::models::holding::StockHolding;
use crate::models::net_worth::NetWorthPoint;
use crate::models::transaction::Transaction;
use super::traits::DataProvider;

/// Fetches each collection as a JSON array from `{base_url}/{collection}`.
///
/// - `GET /accounts`, `/transactions`, `/budgets`
/// - `GET /net-worth-history`, `/spending-by-category`, `/stocks`
///
/// Bodies use the same camelCase shape as the JSON dataset snapshot.
pub struct HttpDataProvider {
    client: Client,
    base_url: String,
}

impl HttpDataProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full endpoint URL for a collection.
    pub fn endpoint(&self, collection: Collection) -> String {
        format!("{}/{}", self.base_url, collection.path())
    }

    async fn fetch<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, CoreError> {
        let url = self.endpoint(collection);

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Api {
                provider: "Http".into(),
                message: format!("GET /{} returned {status}", collection.path()),
            });
        }

        resp.json().await.map_err(|e| CoreError::Api {
            provider: "Http".into(),
            message: format!("Failed to parse {collection}: {e}"),
        })
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DataProvider for HttpDataProvider {
    fn name(&self) -> &str {
        "Http"
    }

    async fn get_accounts(&self) -> Result<Vec<Account>, CoreError> {
        self.fetch(Collection::Accounts).await
    }

    async fn get_transactions(&self) -> Result<Vec<Transaction>, CoreError> {
        self.fetch(Collection::Transactions).await
    }

    async fn get_budgets(&self) -> Result<Vec<Budget>, CoreError> {
        self.fetch(Collection::Budgets).await
    }

    async fn get_net_worth_history(&self) -> Result<Vec<NetWorthPoint>, CoreError> {
        self.fetch(Collection::NetWorthHistory).await
    }

    async fn get_spending_by_category(&self) -> Result<Vec<CategorySummary>, CoreError> {
        self.fetch(Collection::SpendingByCategory).await
    }

    async fn get_stocks(&self) -> Result<Vec<StockHolding>, CoreError> {
        self.fetch(Collection::Stocks).await
    }
}
