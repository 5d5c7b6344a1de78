//! Error types for `mandate-core`, including the conflict classifier.
//!
//! The store reports two recognised kinds of failure: a uniqueness violation
//! on email/NIN ([`Error::DuplicateRegistration`]) and everything else
//! ([`Error::StoreFailure`]). Both are surfaced to the submitter immediately;
//! neither is retried.

use thiserror::Error;

use crate::store::StoreError;

/// The user-facing copy shown for a duplicate email or NIN.
pub const DUPLICATE_MESSAGE: &str = "NIN/Email already registered.";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
  /// A record with the same email or NIN already exists.
  #[error("NIN/Email already registered.")]
  DuplicateRegistration,

  /// Any other failure reported by the store; the native message passes
  /// through unchanged.
  #[error("{message}")]
  StoreFailure {
    /// Backend-specific error code, when one exists.
    code:    Option<String>,
    message: String,
  },
}

impl Error {
  /// Conflict classifier: map a backend error to the recognised kinds.
  ///
  /// Exactly one special case — uniqueness violations become
  /// [`Error::DuplicateRegistration`]; all other errors keep their native
  /// message.
  pub fn classify<E: StoreError>(err: &E) -> Error {
    if err.is_duplicate() {
      Error::DuplicateRegistration
    } else {
      Error::StoreFailure {
        code:    err.code().map(str::to_owned),
        message: err.to_string(),
      }
    }
  }

  /// The message shown to the submitter as a blocking notification.
  pub fn user_message(&self) -> String {
    match self {
      Error::DuplicateRegistration => DUPLICATE_MESSAGE.to_owned(),
      Error::StoreFailure { message, .. } => message.clone(),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug, Error)]
  #[error("{message}")]
  struct FakeStoreError {
    message:   String,
    duplicate: bool,
    code:      Option<String>,
  }

  impl StoreError for FakeStoreError {
    fn is_duplicate(&self) -> bool { self.duplicate }

    fn code(&self) -> Option<&str> { self.code.as_deref() }
  }

  #[test]
  fn duplicate_maps_to_fixed_copy() {
    let err = FakeStoreError {
      message:   "UNIQUE constraint failed: registrations.email".into(),
      duplicate: true,
      code:      Some("2067".into()),
    };
    let classified = Error::classify(&err);
    assert_eq!(classified, Error::DuplicateRegistration);
    assert_eq!(classified.user_message(), DUPLICATE_MESSAGE);
  }

  #[test]
  fn other_errors_pass_native_message_through() {
    let err = FakeStoreError {
      message:   "database is locked".into(),
      duplicate: false,
      code:      Some("5".into()),
    };
    let classified = Error::classify(&err);
    assert_eq!(classified.user_message(), "database is locked");
    assert!(matches!(
      classified,
      Error::StoreFailure { code: Some(c), .. } if c == "5"
    ));
  }
}
