//! The access gate behind the admin surface.
//!
//! Operator access is checked through the [`AccessVerifier`] capability
//! rather than a bare string comparison, so the check can be swapped for a
//! real credential backend without touching the routes. Two verifiers ship:
//! a shared-secret digest compare and an argon2 PHC hash.
//!
//! There is no session persistence, token issuance, or expiry: clients that
//! pass the gate once hold their own authenticated flag for the lifetime of
//! their session and send the secret with each admin request.

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::http::HeaderMap;
use sha2::{Digest, Sha256};

use crate::error::Error;

/// Header carrying the operator secret on admin requests.
pub const ACCESS_HEADER: &str = "x-access-secret";

/// Capability interface for checking a presented operator secret.
pub trait AccessVerifier: Send + Sync {
  fn verify(&self, presented: &str) -> bool;
}

// ─── Shared secret ───────────────────────────────────────────────────────────

/// Verifies against a SHA-256 digest of the shared secret, so the plaintext
/// never sits in the configuration file and the comparison is over
/// fixed-length digests rather than the inputs themselves.
pub struct SharedSecretVerifier {
  digest: [u8; 32],
}

impl SharedSecretVerifier {
  /// Build from a 64-character hex digest (as stored in config).
  pub fn from_digest_hex(digest_hex: &str) -> Result<Self, hex::FromHexError> {
    let bytes = hex::decode(digest_hex)?;
    let digest: [u8; 32] = bytes
      .try_into()
      .map_err(|_| hex::FromHexError::InvalidStringLength)?;
    Ok(Self { digest })
  }

  /// Build from the plaintext secret — used by tests and `--hash-secret`.
  pub fn from_secret(secret: &str) -> Self {
    Self {
      digest: Sha256::digest(secret.as_bytes()).into(),
    }
  }
}

impl AccessVerifier for SharedSecretVerifier {
  fn verify(&self, presented: &str) -> bool {
    let presented_digest: [u8; 32] = Sha256::digest(presented.as_bytes()).into();
    presented_digest == self.digest
  }
}

// ─── Argon2 ──────────────────────────────────────────────────────────────────

/// Verifies against an argon2 PHC string, e.g. `$argon2id$v=19$…`.
pub struct Argon2Verifier {
  phc: String,
}

impl Argon2Verifier {
  pub fn new(phc: impl Into<String>) -> Self { Self { phc: phc.into() } }
}

impl AccessVerifier for Argon2Verifier {
  fn verify(&self, presented: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(&self.phc) else {
      return false;
    };
    Argon2::default()
      .verify_password(presented.as_bytes(), &parsed)
      .is_ok()
  }
}

// ─── Header check ────────────────────────────────────────────────────────────

/// Verify the operator secret carried in [`ACCESS_HEADER`].
pub fn verify_header(
  headers: &HeaderMap,
  verifier: &dyn AccessVerifier,
) -> Result<(), Error> {
  let presented = headers
    .get(ACCESS_HEADER)
    .and_then(|v| v.to_str().ok())
    .ok_or(Error::Unauthorized)?;

  if verifier.verify(presented) {
    Ok(())
  } else {
    Err(Error::Unauthorized)
  }
}
