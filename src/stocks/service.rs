use std::time::Duration;

use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::AppError;
use crate::stocks::model::StockData;

const DEFAULT_BASE_URL: &str = "https://api.tiingo.com";

#[derive(Clone)]
pub struct StockService {
    client: Client,
    api_key: String,
    base_url: String,
}

impl StockService {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the service at a different provider root, e.g. a local stand-in
    /// during tests.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            base_url,
        }
    }

    /// Fetch instrument metadata and the latest price for `ticker` and merge
    /// them into one payload. The calls are sequential; both must succeed.
    pub async fn fetch_stock_data(&self, ticker: &str) -> Result<StockData, AppError> {
        let meta = self.fetch_metadata(ticker).await?;
        let price = self.fetch_latest_price(ticker).await?;

        Ok(StockData { meta, price })
    }

    async fn fetch_metadata(&self, ticker: &str) -> Result<Value, AppError> {
        let url = format!("{}/tiingo/daily/{}", self.base_url, ticker);
        debug!("Fetching metadata for {}", ticker);

        let response = self
            .client
            .get(&url)
            .query(&[("token", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::NotFoundError(
                "No record has been found, please enter a valid symbol.".into(),
            ));
        }

        Ok(response.json().await?)
    }

    async fn fetch_latest_price(&self, ticker: &str) -> Result<Value, AppError> {
        let url = format!("{}/iex/{}", self.base_url, ticker);
        debug!("Fetching latest price for {}", ticker);

        let response = self
            .client
            .get(&url)
            .query(&[("token", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::NotFoundError(
                "No price data available for this symbol.".into(),
            ));
        }

        // The provider returns price records most-recent-first; keep the
        // first one, or an empty object when there are none.
        let records: Vec<Value> = response.json().await?;
        Ok(records.into_iter().next().unwrap_or_else(|| json!({})))
    }
}
