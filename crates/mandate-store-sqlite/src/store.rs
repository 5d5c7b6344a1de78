//! [`SqliteStore`] — the SQLite implementation of [`RegistrationStore`].

use std::path::Path;

use chrono::Utc;
use mandate_core::{
  registration::{NewRegistration, RegistrationRecord},
  store::RegistrationStore,
};
use uuid::Uuid;

use crate::{
  Error, Result,
  encode::{
    RawRegistration, encode_date, encode_dt, encode_education, encode_lga,
    encode_uuid,
  },
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A registration store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── RegistrationStore impl ──────────────────────────────────────────────────

impl RegistrationStore for SqliteStore {
  type Error = Error;

  async fn insert(&self, input: NewRegistration) -> Result<RegistrationRecord> {
    let record = RegistrationRecord {
      registration_id:  Uuid::new_v4(),
      full_name:        input.full_name,
      email:            input.email,
      phone_number:     input.phone_number,
      nin_number:       input.nin_number,
      dob:              input.dob,
      education_level:  input.education_level,
      lga:              input.lga,
      ward:             input.ward,
      benefited_before: input.benefited_before,
      benefit_details:  input.benefit_details,
      created_at:       Utc::now(),
    };

    let id_str        = encode_uuid(record.registration_id);
    let full_name     = record.full_name.clone();
    let email         = record.email.clone();
    let phone_number  = record.phone_number.clone();
    let nin_number    = record.nin_number.clone();
    let dob_str       = encode_date(record.dob);
    let education_str = encode_education(record.education_level);
    let lga_str       = encode_lga(record.lga);
    let ward          = record.ward.clone();
    let benefited     = record.benefited_before;
    let details       = record.benefit_details.clone();
    let created_str   = encode_dt(record.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO registrations (
             registration_id, full_name, email, phone_number, nin_number,
             dob, education_level, lga, ward,
             benefited_before, benefit_details, created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
          rusqlite::params![
            id_str,
            full_name,
            email,
            phone_number,
            nin_number,
            dob_str,
            education_str,
            lga_str,
            ward,
            benefited,
            details,
            created_str,
          ],
        )?;
        Ok(())
      })
      .await
      .map_err(Error::from_db)?;

    Ok(record)
  }

  async fn list_all(&self) -> Result<Vec<RegistrationRecord>> {
    let raws: Vec<RawRegistration> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT
             registration_id, full_name, email, phone_number, nin_number,
             dob, education_level, lga, ward,
             benefited_before, benefit_details, created_at
           FROM registrations
           ORDER BY created_at DESC, rowid DESC",
        )?;

        let rows = stmt
          .query_map([], |row| {
            Ok(RawRegistration {
              registration_id:  row.get(0)?,
              full_name:        row.get(1)?,
              email:            row.get(2)?,
              phone_number:     row.get(3)?,
              nin_number:       row.get(4)?,
              dob:              row.get(5)?,
              education_level:  row.get(6)?,
              lga:              row.get(7)?,
              ward:             row.get(8)?,
              benefited_before: row.get(9)?,
              benefit_details:  row.get(10)?,
              created_at:       row.get(11)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawRegistration::into_record).collect()
  }

  async fn count(&self) -> Result<u64> {
    let n = self
      .conn
      .call(|conn| {
        let n: u64 =
          conn.query_row("SELECT COUNT(*) FROM registrations", [], |row| {
            row.get(0)
          })?;
        Ok(n)
      })
      .await?;
    Ok(n)
  }
}
