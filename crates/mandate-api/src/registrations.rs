//! Handlers for the `/registrations` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/registrations` | Body: [`NewRegistration`] wire shape; 201 + stored record, 409 on duplicate email/NIN |
//! | `GET`  | `/admin/registrations` | Full listing, newest first |

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use mandate_core::{
  registration::{NewRegistration, RegistrationRecord},
  store::RegistrationStore,
};

use crate::error::ApiError;

/// `POST /registrations` — body uses the exact wire field names of the store
/// schema (`full_name`, `email`, `phone_number`, `nin_number`, `dob`,
/// `education_level`, `lga`, `ward`, `benefited_before`, `benefit_details`).
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewRegistration>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RegistrationStore,
{
  let record = store.insert(body).await.map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(record)))
}

/// `GET /admin/registrations` — every stored record, `created_at` descending.
/// No pagination: the dashboard loads the full set on every refresh.
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<RegistrationRecord>>, ApiError>
where
  S: RegistrationStore,
{
  let records = store.list_all().await.map_err(ApiError::from_store)?;
  Ok(Json(records))
}
