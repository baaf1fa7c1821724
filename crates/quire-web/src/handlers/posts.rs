//! `GET /post/view` — every post, newest first.

use axum::{extract::State, response::Html};
use axum_extra::extract::SignedCookieJar;
use quire_core::store::BlogStore;

use crate::{
  AppState, error::Error, flash, handlers::SITE_TITLE, render,
};

pub async fn all<S>(
  State(state): State<AppState<S>>,
  jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Html<String>), Error>
where
  S: BlogStore + Clone + 'static,
{
  let posts = state
    .store
    .all_posts()
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  let (jar, flashes) = flash::take(jar);
  let page = render::shell(
    &format!("All Posts - {SITE_TITLE}"),
    &flashes,
    &render::pages::all_posts(&posts),
  );
  Ok((jar, Html(page)))
}
