//! Handler for `GET /lgas` — the catalogue driving the form's selects.

use axum::Json;
use mandate_core::lga::Lga;
use serde::{Deserialize, Serialize};

/// One LGA with its known wards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LgaEntry {
  pub name:  Lga,
  pub wards: Vec<String>,
}

/// `GET /lgas` — all thirteen areas in form order.
pub async fn list() -> Json<Vec<LgaEntry>> {
  let entries = Lga::ALL
    .iter()
    .map(|&lga| LgaEntry {
      name:  lga,
      wards: lga.wards().iter().map(|w| (*w).to_owned()).collect(),
    })
    .collect();
  Json(entries)
}
