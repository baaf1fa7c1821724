//! Error types for `quire-core`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("post text is empty")]
  EmptyPost,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
