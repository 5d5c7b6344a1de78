//! Error type for `mandate-store-sqlite`.

use mandate_core::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A UNIQUE constraint on email or nin_number rejected the insert.
  #[error("a record with this email or NIN already exists")]
  DuplicateRegistration,

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("column decode error: {0}")]
  Decode(String),
}

impl Error {
  /// Fold SQLite unique-constraint failures into
  /// [`Error::DuplicateRegistration`]; everything else passes through.
  pub(crate) fn from_db(err: tokio_rusqlite::Error) -> Error {
    if is_unique_violation(&err) {
      Error::DuplicateRegistration
    } else {
      Error::Database(err)
    }
  }
}

fn is_unique_violation(err: &tokio_rusqlite::Error) -> bool {
  matches!(
    err,
    tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(e, _))
      if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
  )
}

impl StoreError for Error {
  fn is_duplicate(&self) -> bool {
    matches!(self, Error::DuplicateRegistration)
  }

  fn code(&self) -> Option<&str> {
    // SQLite's extended code for UNIQUE violations; mirrors what the raw
    // driver would report.
    match self {
      Error::DuplicateRegistration => Some("2067"),
      _ => None,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
