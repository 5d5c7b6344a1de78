//! Aggregation reporter — per-LGA counts for the admin dashboard.
//!
//! Counts are grouped in order of first appearance in the fetched record set
//! (which arrives newest-first from the store), not sorted alphabetically or
//! by count. The dashboard chart relies on that ordering being stable across
//! refreshes of an unchanged set.

use serde::{Deserialize, Serialize};

use crate::{lga::Lga, registration::RegistrationRecord};

/// One bar of the dashboard chart. Serialises as `{"name": ..., "count": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LgaCount {
  pub name:  Lga,
  pub count: u64,
}

/// Group `records` by LGA, preserving first-seen order.
///
/// The full set is aggregated on every call; there is no pagination and no
/// incremental merge.
pub fn lga_counts(records: &[RegistrationRecord]) -> Vec<LgaCount> {
  let mut counts: Vec<LgaCount> = Vec::new();
  for record in records {
    match counts.iter_mut().find(|c| c.name == record.lga) {
      Some(entry) => entry.count += 1,
      None => counts.push(LgaCount {
        name:  record.lga,
        count: 1,
      }),
    }
  }
  counts
}
