//! Server error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// The rejection copy shown when the access gate turns a request away.
pub const REJECTION_MESSAGE: &str = "Invalid Access Credentials.";

#[derive(Debug, Error)]
pub enum Error {
  #[error("unauthorized")]
  Unauthorized,
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::Unauthorized => (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": REJECTION_MESSAGE })),
      )
        .into_response(),
    }
  }
}
