//! One-shot flash messages carried across a redirect.
//!
//! The queue lives in a single signed cookie. A handler that redirects
//! appends to it with [`push`]; the next page render drains it with
//! [`take`], which also tells the browser to drop the cookie.

use axum_extra::extract::{
  SignedCookieJar,
  cookie::{Cookie, Key, SameSite},
};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD as B64;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};

pub const FLASH_COOKIE: &str = "quire_flash";

/// Most messages kept in the queue; older ones are dropped first so the
/// cookie stays well under browser size limits.
pub const MAX_QUEUED: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
  Success,
  Error,
}

impl FlashLevel {
  /// CSS class used when rendering.
  pub fn as_str(self) -> &'static str {
    match self {
      FlashLevel::Success => "success",
      FlashLevel::Error => "error",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
  pub level:   FlashLevel,
  pub message: String,
}

/// Derive the cookie signing key from the configured secret.
///
/// SHA-512 stretches any secret to the 64 bytes [`Key`] requires.
pub fn cookie_key(secret: &str) -> Key {
  Key::from(Sha512::digest(secret.as_bytes()).as_slice())
}

/// Flashes currently queued in `jar`, without consuming them.
pub fn pending(jar: &SignedCookieJar) -> Vec<Flash> {
  jar
    .get(FLASH_COOKIE)
    .and_then(|c| decode(c.value()))
    .unwrap_or_default()
}

/// Queue a message for the next rendered page.
pub fn push(
  jar: SignedCookieJar,
  level: FlashLevel,
  message: impl Into<String>,
) -> SignedCookieJar {
  let mut queue = pending(&jar);
  queue.push(Flash { level, message: message.into() });
  if queue.len() > MAX_QUEUED {
    queue.drain(..queue.len() - MAX_QUEUED);
  }

  match encode(&queue) {
    Ok(value) => jar.add(
      Cookie::build((FLASH_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax),
    ),
    Err(e) => {
      tracing::warn!(error = %e, "dropping flash message that failed to encode");
      jar
    }
  }
}

/// Drain the queue. The returned jar removes the cookie client-side.
pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Vec<Flash>) {
  if jar.get(FLASH_COOKIE).is_none() {
    return (jar, Vec::new());
  }
  let flashes = pending(&jar);
  (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), flashes)
}

fn encode(flashes: &[Flash]) -> serde_json::Result<String> {
  Ok(B64.encode(serde_json::to_vec(flashes)?))
}

fn decode(value: &str) -> Option<Vec<Flash>> {
  let bytes = B64.decode(value).ok()?;
  serde_json::from_slice(&bytes).ok()
}
