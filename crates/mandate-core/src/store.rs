//! The `RegistrationStore` trait and its error contract.
//!
//! The trait is implemented by storage backends (e.g.
//! `mandate-store-sqlite`). Higher layers (`mandate-api`, `mandate-server`)
//! depend on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::registration::{NewRegistration, RegistrationRecord};

/// The error contract a backend must expose so failures can be classified
/// by [`crate::Error::classify`] without naming the backend.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  /// True when the failure is a uniqueness violation on email or NIN.
  fn is_duplicate(&self) -> bool;

  /// Backend-specific error code, when one exists.
  fn code(&self) -> Option<&str> { None }
}

/// Abstraction over a registration store backend.
///
/// The store is append-only: records are inserted once and never mutated.
/// Uniqueness of email and NIN is enforced by the backend's own constraints;
/// this system coordinates no concurrent writers of its own.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait RegistrationStore: Send + Sync {
  type Error: StoreError;

  /// Persist a new registration, assigning `registration_id` and
  /// `created_at`, and return the stored record.
  ///
  /// A record with a duplicate email or NIN must fail with an error whose
  /// [`StoreError::is_duplicate`] is true.
  fn insert(
    &self,
    input: NewRegistration,
  ) -> impl Future<Output = Result<RegistrationRecord, Self::Error>> + Send + '_;

  /// Return every stored record, ordered by creation time descending
  /// (newest first; ties broken by insertion order, later first).
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<RegistrationRecord>, Self::Error>> + Send + '_;

  /// The number of stored records.
  fn count(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
