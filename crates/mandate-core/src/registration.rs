//! Registration record types — the single entity this system stores.
//!
//! A registration is an immutable claim that one constituent signed up.
//! Records are never updated or deleted; they are written once by the intake
//! path and read in bulk by the aggregation reporter.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::lga::Lga;

// ─── Education level ─────────────────────────────────────────────────────────

/// The closed set of education levels offered by the registration form.
///
/// Serialised strings match the form's option values exactly, mixed casing
/// and all.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumString,
  strum::EnumIter,
)]
pub enum EducationLevel {
  #[serde(rename = "Primary Cert")]
  #[strum(serialize = "Primary Cert")]
  PrimaryCert,
  #[serde(rename = "SSCE")]
  #[strum(serialize = "SSCE")]
  Ssce,
  #[serde(rename = "NCE")]
  #[strum(serialize = "NCE")]
  Nce,
  Diploma,
  #[serde(rename = "HND")]
  #[strum(serialize = "HND")]
  Hnd,
  Bsc,
}

impl EducationLevel {
  /// All levels, in the order the registration form lists them.
  pub const ALL: [EducationLevel; 6] = [
    EducationLevel::PrimaryCert,
    EducationLevel::Ssce,
    EducationLevel::Nce,
    EducationLevel::Diploma,
    EducationLevel::Hnd,
    EducationLevel::Bsc,
  ];
}

// ─── RegistrationRecord ──────────────────────────────────────────────────────

/// A stored constituent registration. Field names are the wire contract —
/// they match the store schema verbatim and must not be renamed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRecord {
  pub registration_id: Uuid,
  pub full_name:       String,
  /// Unique across all records.
  pub email:           String,
  pub phone_number:    String,
  /// National Identification Number; unique across all records.
  pub nin_number:      String,
  pub dob:             NaiveDate,
  pub education_level: EducationLevel,
  pub lga:             Lga,
  /// A ward from [`Lga::wards`], or a free-text name when the submitter's
  /// ward was not listed.
  pub ward:            String,
  pub benefited_before: bool,
  /// Empty unless `benefited_before` is set.
  pub benefit_details: String,
  /// Server-assigned timestamp; never changes after creation.
  pub created_at:      DateTime<Utc>,
}

// ─── NewRegistration ─────────────────────────────────────────────────────────

/// Input to [`crate::store::RegistrationStore::insert`].
/// `registration_id` and `created_at` are always set by the store; they are
/// not accepted from callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRegistration {
  pub full_name:       String,
  pub email:           String,
  pub phone_number:    String,
  pub nin_number:      String,
  pub dob:             NaiveDate,
  pub education_level: EducationLevel,
  pub lga:             Lga,
  pub ward:            String,
  #[serde(default)]
  pub benefited_before: bool,
  #[serde(default)]
  pub benefit_details: String,
}
