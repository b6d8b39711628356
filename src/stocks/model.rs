use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct TickerQuery {
    #[serde(default)]
    pub ticker: Option<String>,
}

/// Combined lookup result. Both halves are passed through from the provider
/// verbatim; no schema is enforced on either.
#[derive(Debug, Serialize, Deserialize)]
pub struct StockData {
    pub meta: Value,
    pub price: Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
