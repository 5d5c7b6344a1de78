//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, dates of birth as plain
//! `YYYY-MM-DD`, UUIDs as hyphenated lowercase strings, and the closed enums
//! (education level, LGA) as their canonical display strings.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use mandate_core::{
  lga::Lga,
  registration::{EducationLevel, RegistrationRecord},
};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::Decode(e.to_string()))
}

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { d.format("%Y-%m-%d").to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| Error::Decode(e.to_string()))
}

// ─── Closed enums ────────────────────────────────────────────────────────────

pub fn encode_education(level: EducationLevel) -> String { level.to_string() }

pub fn decode_education(s: &str) -> Result<EducationLevel> {
  EducationLevel::from_str(s)
    .map_err(|_| Error::Decode(format!("unknown education level: {s:?}")))
}

pub fn encode_lga(lga: Lga) -> String { lga.to_string() }

pub fn decode_lga(s: &str) -> Result<Lga> {
  Lga::from_str(s).map_err(|_| Error::Decode(format!("unknown lga: {s:?}")))
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw strings read directly from a `registrations` row.
pub struct RawRegistration {
  pub registration_id:  String,
  pub full_name:        String,
  pub email:            String,
  pub phone_number:     String,
  pub nin_number:       String,
  pub dob:              String,
  pub education_level:  String,
  pub lga:              String,
  pub ward:             String,
  pub benefited_before: bool,
  pub benefit_details:  String,
  pub created_at:       String,
}

impl RawRegistration {
  pub fn into_record(self) -> Result<RegistrationRecord> {
    Ok(RegistrationRecord {
      registration_id:  decode_uuid(&self.registration_id)?,
      full_name:        self.full_name,
      email:            self.email,
      phone_number:     self.phone_number,
      nin_number:       self.nin_number,
      dob:              decode_date(&self.dob)?,
      education_level:  decode_education(&self.education_level)?,
      lga:              decode_lga(&self.lga)?,
      ward:             self.ward,
      benefited_before: self.benefited_before,
      benefit_details:  self.benefit_details,
      created_at:       decode_dt(&self.created_at)?,
    })
  }
}
