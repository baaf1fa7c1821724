//! The blog owner's profile and the stored login credential.

use serde::{Deserialize, Serialize};

/// Singleton row describing the blog owner, shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
  pub id:    i64,
  pub name:  Option<String>,
  pub bio:   Option<String>,
  pub image: Option<String>,
}

impl Profile {
  /// The owner's name, if set and non-blank.
  pub fn display_name(&self) -> Option<&str> {
    self.name.as_deref().filter(|n| !n.trim().is_empty())
  }

  /// The bio text, if set and non-blank.
  pub fn display_bio(&self) -> Option<&str> {
    self.bio.as_deref().filter(|b| !b.trim().is_empty())
  }
}

/// Stored login pair. No route consults it; it is kept so the schema stays
/// complete.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
  pub login:    String,
  pub password: String,
}

impl std::fmt::Debug for Credential {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Credential")
      .field("login", &self.login)
      .field("password", &"<redacted>")
      .finish()
  }
}
