//! Async HTTP client wrapping the mandate JSON API.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use mandate_core::registration::{NewRegistration, RegistrationRecord};
use reqwest::Client;

/// Header carrying the operator secret on admin requests.
const ACCESS_HEADER: &str = "x-access-secret";

/// Connection settings for the mandate API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// Async HTTP client for the mandate JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{path}", self.config.base_url.trim_end_matches('/'))
  }

  /// `POST /registrations` — submit one registration.
  ///
  /// On failure the server's user-facing message (duplicate copy or the
  /// store's native message) is returned as the error text.
  pub async fn register(
    &self,
    registration: &NewRegistration,
  ) -> Result<RegistrationRecord> {
    let resp = self
      .client
      .post(self.url("/registrations"))
      .json(registration)
      .send()
      .await
      .context("POST /registrations failed")?;

    if !resp.status().is_success() {
      return Err(anyhow!(error_message(resp).await));
    }
    resp.json().await.context("deserialising stored record")
  }

  /// `POST /session` — verify the operator secret.
  ///
  /// Returns `Ok(true)` on acceptance and `Ok(false)` on rejection;
  /// transport failures are errors.
  pub async fn open_session(&self, secret: &str) -> Result<bool> {
    let resp = self
      .client
      .post(self.url("/session"))
      .json(&serde_json::json!({ "secret": secret }))
      .send()
      .await
      .context("POST /session failed")?;

    match resp.status() {
      s if s.is_success() => Ok(true),
      reqwest::StatusCode::UNAUTHORIZED => Ok(false),
      s => Err(anyhow!("POST /session → {s}")),
    }
  }

  /// `GET /admin/registrations` — the full record listing, newest first.
  pub async fn list_registrations(
    &self,
    secret: &str,
  ) -> Result<Vec<RegistrationRecord>> {
    let resp = self
      .client
      .get(self.url("/admin/registrations"))
      .header(ACCESS_HEADER, secret)
      .send()
      .await
      .context("GET /admin/registrations failed")?;

    if !resp.status().is_success() {
      return Err(anyhow!(error_message(resp).await));
    }
    resp.json().await.context("deserialising registrations")
  }
}

/// Pull the `error` field out of a JSON error body, falling back to the
/// status code.
async fn error_message(resp: reqwest::Response) -> String {
  let status = resp.status();
  match resp.json::<serde_json::Value>().await {
    Ok(body) => body
      .get("error")
      .and_then(|e| e.as_str())
      .map(str::to_owned)
      .unwrap_or_else(|| status.to_string()),
    Err(_) => status.to_string(),
  }
}
