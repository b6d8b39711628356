use axum::{routing::get, Router};

use crate::stocks::{handler, service::StockService};

pub fn stock_routes(service: StockService) -> Router {
  Router::new()
      .route("/get_stock_data", get(handler::get_stock_data))
      .with_state(service)
}
