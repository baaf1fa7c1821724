pub mod category;
pub mod home;
pub mod posts;

use axum::{
  http::{StatusCode, Uri},
  response::{Html, IntoResponse, Response},
};

use crate::render;

pub(crate) const SITE_TITLE: &str = "My Blog";

/// Fallback for unrouted paths. Pending flashes are left for the next real
/// page.
pub async fn not_found(uri: Uri) -> Response {
  let page = render::shell(
    &format!("Page Not Found - {SITE_TITLE}"),
    &[],
    &render::pages::not_found(uri.path()),
  );
  (StatusCode::NOT_FOUND, Html(page)).into_response()
}
