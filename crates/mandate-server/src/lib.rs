//! HTTP server assembly for the Mandate registration platform.
//!
//! Wires the public and admin routers from `mandate-api` to a concrete
//! store, puts the admin surface behind the access gate, and exposes the
//! session-opening endpoint the terminal client uses to light its
//! authenticated flag.

pub mod access;
pub mod error;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Json, Router,
  extract::{Request, State},
  http::StatusCode,
  middleware::{self, Next},
  response::{IntoResponse, Response},
  routing::post,
};
use mandate_core::store::RegistrationStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use access::AccessVerifier;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` (with
/// `MANDATE_*` environment overrides).
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
  /// SHA-256 hex digest of the shared operator secret.
  pub access_secret_sha256: Option<String>,
  /// argon2 PHC string for the operator secret; takes precedence when set.
  pub access_secret_argon2: Option<String>,
}

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S> {
  pub store:    Arc<S>,
  pub verifier: Arc<dyn AccessVerifier>,
  pub config:   Arc<ServerConfig>,
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      store:    self.store.clone(),
      verifier: self.verifier.clone(),
      config:   self.config.clone(),
    }
  }
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build the full application router.
///
/// - `POST /registrations`, `GET /lgas` — public;
/// - `POST /session` — the access gate; 204 or 401;
/// - `GET /admin/registrations`, `GET /admin/stats` — require the operator
///   secret in the `x-access-secret` header on every request.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: RegistrationStore + Clone + Send + Sync + 'static,
{
  let admin = mandate_api::admin_router(state.store.clone()).layer(
    middleware::from_fn_with_state(state.clone(), require_access::<S>),
  );

  Router::new()
    .route("/session", post(open_session::<S>))
    .with_state(state.clone())
    .merge(mandate_api::public_router(state.store.clone()))
    .nest("/admin", admin)
    .layer(TraceLayer::new_for_http())
}

// ─── Access gate ─────────────────────────────────────────────────────────────

/// Body of `POST /session`.
#[derive(Debug, Deserialize)]
pub struct SessionBody {
  pub secret: String,
}

/// `POST /session` — verify an operator secret.
///
/// Grants nothing durable: no token, no cookie, no expiry. A client that
/// receives 204 holds its own authenticated flag for the lifetime of its
/// session and presents the secret on each admin request.
async fn open_session<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<SessionBody>,
) -> Result<StatusCode, Error>
where
  S: RegistrationStore + Clone + Send + Sync + 'static,
{
  if state.verifier.verify(&body.secret) {
    Ok(StatusCode::NO_CONTENT)
  } else {
    tracing::warn!("rejected operator session attempt");
    Err(Error::Unauthorized)
  }
}

async fn require_access<S>(
  State(state): State<AppState<S>>,
  req: Request,
  next: Next,
) -> Response
where
  S: RegistrationStore + Clone + Send + Sync + 'static,
{
  match access::verify_header(req.headers(), state.verifier.as_ref()) {
    Ok(()) => next.run(req).await,
    Err(e) => e.into_response(),
  }
}

// ─── Integration tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use mandate_store_sqlite::SqliteStore;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  use super::*;
  use crate::access::{ACCESS_HEADER, SharedSecretVerifier};

  const SECRET: &str = "KLM_Jagaban_2031";

  async fn make_state() -> AppState<SqliteStore> {
    let store = SqliteStore::open_in_memory().await.unwrap();
    AppState {
      store:    Arc::new(store),
      verifier: Arc::new(SharedSecretVerifier::from_secret(SECRET)),
      config:   Arc::new(ServerConfig {
        host:       "127.0.0.1".to_string(),
        port:       8328,
        store_path: PathBuf::from(":memory:"),
        access_secret_sha256: None,
        access_secret_argon2: None,
      }),
    }
  }

  async fn oneshot_raw(
    state:   AppState<SqliteStore>,
    method:  &str,
    uri:     &str,
    headers: Vec<(&str, &str)>,
    body:    Value,
  ) -> axum::response::Response {
    let mut builder = Request::builder()
      .method(method)
      .uri(uri)
      .header(header::CONTENT_TYPE, "application/json");
    for (k, v) in headers {
      builder = builder.header(k, v);
    }
    let req = builder.body(Body::from(body.to_string())).unwrap();
    router(state).oneshot(req).await.unwrap()
  }

  async fn json_body(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    serde_json::from_slice(&bytes).unwrap()
  }

  fn registration_body(email: &str, nin: &str, lga: &str) -> Value {
    json!({
      "full_name": "Aisha Bello",
      "email": email,
      "phone_number": "08030000000",
      "nin_number": nin,
      "dob": "1995-04-12",
      "education_level": "SSCE",
      "lga": lga,
      "ward": "Galadima",
      "benefited_before": false,
      "benefit_details": ""
    })
  }

  // ── Registration ──────────────────────────────────────────────────────────

  #[tokio::test]
  async fn register_returns_201_with_stored_record() {
    let state = make_state().await;
    let resp = oneshot_raw(
      state,
      "POST",
      "/registrations",
      vec![],
      registration_body("aisha@example.com", "11111111111", "Gusau"),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["email"], "aisha@example.com");
    assert_eq!(body["lga"], "Gusau");
    assert!(body["registration_id"].is_string());
    assert!(body["created_at"].is_string());
  }

  #[tokio::test]
  async fn duplicate_registration_returns_409_with_fixed_copy() {
    let state = make_state().await;
    let first = oneshot_raw(
      state.clone(),
      "POST",
      "/registrations",
      vec![],
      registration_body("same@example.com", "11111111111", "Gusau"),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = oneshot_raw(
      state.clone(),
      "POST",
      "/registrations",
      vec![],
      registration_body("same@example.com", "22222222222", "Maru"),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body = json_body(second).await;
    assert_eq!(body["error"], "NIN/Email already registered.");

    // Exactly one row stored.
    let list = oneshot_raw(
      state,
      "GET",
      "/admin/registrations",
      vec![(ACCESS_HEADER, SECRET)],
      json!(null),
    )
    .await;
    let records = json_body(list).await;
    assert_eq!(records.as_array().unwrap().len(), 1);
  }

  #[tokio::test]
  async fn unknown_lga_is_rejected() {
    let state = make_state().await;
    let resp = oneshot_raw(
      state,
      "POST",
      "/registrations",
      vec![],
      registration_body("a@example.com", "1", "Ikeja"),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
  }

  // ── Access gate ───────────────────────────────────────────────────────────

  #[tokio::test]
  async fn session_with_correct_secret_returns_204() {
    let state = make_state().await;
    let resp = oneshot_raw(
      state,
      "POST",
      "/session",
      vec![],
      json!({ "secret": SECRET }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
  }

  #[tokio::test]
  async fn session_with_wrong_secret_returns_rejection_notice() {
    let state = make_state().await;
    let resp = oneshot_raw(
      state,
      "POST",
      "/session",
      vec![],
      json!({ "secret": "guess" }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "Invalid Access Credentials.");
  }

  #[tokio::test]
  async fn admin_routes_require_the_secret_header() {
    let state = make_state().await;

    let bare = oneshot_raw(
      state.clone(),
      "GET",
      "/admin/registrations",
      vec![],
      json!(null),
    )
    .await;
    assert_eq!(bare.status(), StatusCode::UNAUTHORIZED);

    let wrong = oneshot_raw(
      state.clone(),
      "GET",
      "/admin/stats",
      vec![(ACCESS_HEADER, "guess")],
      json!(null),
    )
    .await;
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

    let ok = oneshot_raw(
      state,
      "GET",
      "/admin/stats",
      vec![(ACCESS_HEADER, SECRET)],
      json!(null),
    )
    .await;
    assert_eq!(ok.status(), StatusCode::OK);
  }

  #[tokio::test]
  async fn public_routes_need_no_secret() {
    let state = make_state().await;
    let resp = oneshot_raw(state, "GET", "/lgas", vec![], json!(null)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 13);
  }

  // ── Aggregation ───────────────────────────────────────────────────────────

  #[tokio::test]
  async fn stats_group_by_lga_in_first_seen_order() {
    let state = make_state().await;

    // Oldest to newest: Anka, Anka, Bakura, Anka.
    for (i, lga) in ["Anka", "Anka", "Bakura", "Anka"].iter().enumerate() {
      let resp = oneshot_raw(
        state.clone(),
        "POST",
        "/registrations",
        vec![],
        registration_body(&format!("u{i}@example.com"), &format!("nin-{i}"), lga),
      )
      .await;
      assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = oneshot_raw(
      state,
      "GET",
      "/admin/stats",
      vec![(ACCESS_HEADER, SECRET)],
      json!(null),
    )
    .await;
    let body = json_body(resp).await;

    assert_eq!(body["total"], 4);
    // The listing is newest-first, so Anka (the newest record) appears
    // before Bakura regardless of alphabet or count.
    assert_eq!(body["by_lga"][0]["name"], "Anka");
    assert_eq!(body["by_lga"][0]["count"], 3);
    assert_eq!(body["by_lga"][1]["name"], "Bakura");
    assert_eq!(body["by_lga"][1]["count"], 1);
  }

  #[tokio::test]
  async fn refresh_after_insert_reflects_new_counts() {
    let state = make_state().await;

    let resp = oneshot_raw(
      state.clone(),
      "POST",
      "/registrations",
      vec![],
      registration_body("a@example.com", "1", "Zurmi"),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let before = json_body(
      oneshot_raw(
        state.clone(),
        "GET",
        "/admin/stats",
        vec![(ACCESS_HEADER, SECRET)],
        json!(null),
      )
      .await,
    )
    .await;
    assert_eq!(before["total"], 1);

    let resp = oneshot_raw(
      state.clone(),
      "POST",
      "/registrations",
      vec![],
      registration_body("b@example.com", "2", "Zurmi"),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let after = json_body(
      oneshot_raw(
        state,
        "GET",
        "/admin/stats",
        vec![(ACCESS_HEADER, SECRET)],
        json!(null),
      )
      .await,
    )
    .await;
    assert_eq!(after["total"], 2);
    assert_eq!(after["by_lga"][0]["count"], 2);
  }
}
