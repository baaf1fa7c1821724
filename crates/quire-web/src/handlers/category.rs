//! `GET` and `POST /post/category/{name}`.
//!
//! Both methods resolve the category first. An unknown name is not an HTTP
//! error: it becomes an error flash and a redirect home. A submission always
//! ends in a redirect back to the listing, so refreshing the page never
//! re-posts.

use axum::{
  Form,
  extract::{Path, State, rejection::FormRejection},
  response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::SignedCookieJar;
use quire_core::{post::PostText, store::BlogStore};
use serde::Deserialize;

use crate::{
  AppState,
  error::Error,
  flash::{self, FlashLevel},
  handlers::SITE_TITLE,
  render,
};

pub const PUBLISHED: &str = "Your post has been published successfully!";
pub const EMPTY_POST: &str = "Please write something before submitting.";

fn category_not_found(jar: SignedCookieJar, name: &str) -> Response {
  tracing::warn!(category = %name, "unknown category requested");
  let jar = flash::push(
    jar,
    FlashLevel::Error,
    format!("Category \"{name}\" not found!"),
  );
  (jar, Redirect::to("/")).into_response()
}

// ─── Listing ──────────────────────────────────────────────────────────────────

/// `GET /post/category/{name}`
pub async fn show<S>(
  State(state): State<AppState<S>>,
  Path(name): Path<String>,
  jar: SignedCookieJar,
) -> Result<Response, Error>
where
  S: BlogStore + Clone + 'static,
{
  let found = state
    .store
    .category_id(&name)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;
  if found.is_none() {
    return Ok(category_not_found(jar, &name));
  }

  let posts = state
    .store
    .posts_in_category(&name)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  let (jar, flashes) = flash::take(jar);
  let page = render::shell(
    &format!("{} Posts - {SITE_TITLE}", render::title_case(&name)),
    &flashes,
    &render::pages::category(&name, &posts),
  );
  Ok((jar, Html(page)).into_response())
}

// ─── Submission ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PublishForm {
  #[serde(default)]
  pub post: String,
}

/// `POST /post/category/{name}` — form field `post`.
///
/// A body that is not a urlencoded form counts as an empty submission, and
/// is only looked at once the category is known to exist.
pub async fn publish<S>(
  State(state): State<AppState<S>>,
  Path(name): Path<String>,
  jar: SignedCookieJar,
  form: Result<Form<PublishForm>, FormRejection>,
) -> Result<Response, Error>
where
  S: BlogStore + Clone + 'static,
{
  let Some(category_id) = state
    .store
    .category_id(&name)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?
  else {
    return Ok(category_not_found(jar, &name));
  };

  let raw = match form {
    Ok(Form(form)) => form.post,
    Err(rejection) => {
      tracing::debug!(category = %name, error = %rejection, "unreadable form body");
      String::new()
    }
  };

  let jar = match PostText::parse(&raw) {
    Ok(text) => {
      let post_id = state
        .store
        .create_post(category_id, &text)
        .await
        .map_err(|e| Error::Store(Box::new(e)))?;
      tracing::info!(post_id = %post_id, category = %name, "post published");
      flash::push(jar, FlashLevel::Success, PUBLISHED)
    }
    Err(e) => {
      tracing::debug!(category = %name, error = %e, "rejected submission");
      flash::push(jar, FlashLevel::Error, EMPTY_POST)
    }
  };

  Ok((jar, Redirect::to(&render::category_path(&name))).into_response())
}
