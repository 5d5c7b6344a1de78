//! JSON REST API for the Mandate registration platform.
//!
//! Exposes axum [`Router`]s backed by any
//! [`mandate_core::store::RegistrationStore`]. The access gate, TLS, and
//! transport concerns are the caller's responsibility — `mandate-server`
//! wraps [`admin_router`] in its verifier middleware.
//!
//! # Mounting
//!
//! ```rust,ignore
//! Router::new()
//!   .merge(mandate_api::public_router(store.clone()))
//!   .nest("/admin", mandate_api::admin_router(store.clone()).layer(gate))
//! ```

pub mod error;
pub mod lgas;
pub mod registrations;
pub mod stats;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use mandate_core::store::RegistrationStore;

pub use error::ApiError;

/// Routes open to everyone: submitting a registration and reading the LGA
/// catalogue that drives the form's select controls.
pub fn public_router<S>(store: Arc<S>) -> Router<()>
where
  S: RegistrationStore + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/registrations", post(registrations::create::<S>))
    .route("/lgas", get(lgas::list))
    .with_state(store)
}

/// Routes reserved for the operator dashboard: the full record listing and
/// the per-LGA aggregation.
pub fn admin_router<S>(store: Arc<S>) -> Router<()>
where
  S: RegistrationStore + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/registrations", get(registrations::list::<S>))
    .route("/stats", get(stats::handler::<S>))
    .with_state(store)
}
