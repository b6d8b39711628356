use std::path::PathBuf;

use axum::{
  http::StatusCode,
  routing::get,
  Json, Router,
};
use serde_json::json;
use tower_http::{
  cors::{Any, CorsLayer},
  services::{ServeDir, ServeFile},
  trace::TraceLayer,
};

use crate::{
  config::Config,
  stocks::{routes::stock_routes, service::StockService},
};

pub fn create_router(config: &Config, service: StockService) -> Router {
  // Setup CORS
  let cors = CorsLayer::new()
      .allow_origin(Any)
      .allow_methods(Any)
      .allow_headers(Any);

  // Landing page and assets; unknown paths fall back to the index
  let static_dir = PathBuf::from(&config.static_dir);
  let index_file = static_dir.join("index.html");
  let static_service = ServeDir::new(&static_dir).fallback(ServeFile::new(index_file));

  // Build the router
  Router::new()
      .route("/api/health", get(health_check))
      .merge(stock_routes(service))
      .fallback_service(static_service)
      .layer(TraceLayer::new_for_http())
      .layer(cors)
}

async fn health_check() -> (StatusCode, Json<serde_json::Value>) {
  (
      StatusCode::OK,
      Json(json!({
          "status": "success",
          "message": "Server is running"
      })),
  )
}
