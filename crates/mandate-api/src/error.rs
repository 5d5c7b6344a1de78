//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use mandate_core::store::StoreError;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// A record with the same email or NIN already exists.
  #[error("{0}")]
  Duplicate(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Classify a backend failure into the two recognised kinds.
  pub fn from_store<E: StoreError>(err: E) -> ApiError {
    let classified = mandate_core::Error::classify(&err);
    match classified {
      mandate_core::Error::DuplicateRegistration => {
        ApiError::Duplicate(classified.user_message())
      }
      mandate_core::Error::StoreFailure { .. } => ApiError::Store(Box::new(err)),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::Duplicate(m) => (StatusCode::CONFLICT, m.clone()),
      ApiError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
