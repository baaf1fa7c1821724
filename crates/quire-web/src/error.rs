//! Error types and axum `IntoResponse` implementation.
//!
//! Expected failures (unknown category, empty post) never reach this type:
//! handlers turn them into a flash message and a redirect. What is left is
//! unexpected store trouble, rendered as a generic error page.

use axum::{
  http::StatusCode,
  response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::render;

#[derive(Debug, Error)]
pub enum Error {
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::Store(e) => {
        tracing::error!(error = %e, "store failure while handling request");
        let page = render::shell(
          "Something Went Wrong - My Blog",
          &[],
          &render::pages::server_error(),
        );
        (StatusCode::INTERNAL_SERVER_ERROR, Html(page)).into_response()
      }
    }
  }
}
