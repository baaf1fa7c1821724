//! `GET /`, `GET /index` and `GET /about`.

use axum::{
  extract::State,
  response::{Html, Redirect},
};
use axum_extra::extract::SignedCookieJar;
use quire_core::store::BlogStore;

use crate::{
  AppState, error::Error, flash, handlers::SITE_TITLE, render,
};

pub async fn home<S>(
  State(state): State<AppState<S>>,
  jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Html<String>), Error>
where
  S: BlogStore + Clone + 'static,
{
  let profile = state
    .store
    .profile()
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  let (jar, flashes) = flash::take(jar);
  let page = render::shell(
    &format!("Welcome - {SITE_TITLE}"),
    &flashes,
    &render::pages::home(profile.as_ref()),
  );
  Ok((jar, Html(page)))
}

/// The about text lives on the home page.
pub async fn about() -> Redirect { Redirect::to("/") }
