use axum::{
  extract::{Query, State},
  Json,
};

use crate::error::AppError;
use crate::stocks::{
  model::{StockData, TickerQuery},
  service::StockService,
};

pub async fn get_stock_data(
  State(service): State<StockService>,
  Query(query): Query<TickerQuery>,
) -> Result<Json<StockData>, AppError> {
  let ticker = query.ticker.unwrap_or_default();
  if ticker.is_empty() {
      return Err(AppError::ValidationError("No ticker symbol provided".into()));
  }

  let data = service.fetch_stock_data(&ticker).await?;
  Ok(Json(data))
}
