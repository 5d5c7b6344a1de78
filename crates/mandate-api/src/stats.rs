//! Handler for `GET /admin/stats` — the dashboard aggregation.

use std::sync::Arc;

use axum::{Json, extract::State};
use mandate_core::{
  report::{LgaCount, lga_counts},
  store::RegistrationStore,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Aggregated dashboard numbers. `by_lga` preserves first-seen order of the
/// newest-first record listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
  pub total:  u64,
  pub by_lga: Vec<LgaCount>,
}

/// `GET /admin/stats`
pub async fn handler<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<StatsResponse>, ApiError>
where
  S: RegistrationStore,
{
  let total = store.count().await.map_err(ApiError::from_store)?;
  let records = store.list_all().await.map_err(ApiError::from_store)?;
  Ok(Json(StatsResponse {
    total,
    by_lga: lga_counts(&records),
  }))
}
