//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
///
/// Source and cache failures never reach this type; the aggregator degrades
/// them before a handler sees them. The only failure a caller can cause is a
/// malformed NIC number.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  InvalidNic(#[from] upandina_nic::Error),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::InvalidNic(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}
