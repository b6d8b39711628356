use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
  #[error("{0}")]
  ValidationError(String),

  #[error("{0}")]
  NotFoundError(String),

  #[error("Config error: {0}")]
  ConfigError(String),

  #[error("{0}")]
  InternalError(String),
}

impl From<reqwest::Error> for AppError {
  fn from(err: reqwest::Error) -> Self {
      Self::InternalError(err.to_string())
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
      let (status, error_message) = match self {
          AppError::ValidationError(_) => (StatusCode::BAD_REQUEST, self.to_string()),
          AppError::NotFoundError(_) => (StatusCode::NOT_FOUND, self.to_string()),
          AppError::ConfigError(_) => (
              StatusCode::INTERNAL_SERVER_ERROR,
              "A configuration error occurred".to_string(),
          ),
          AppError::InternalError(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
      };

      let body = Json(json!({
          "error": error_message,
      }));

      (status, body).into_response()
  }
}
