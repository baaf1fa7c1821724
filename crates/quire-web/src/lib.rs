//! Web layer for the Quire blog.
//!
//! Exposes an axum [`Router`] serving server-rendered HTML pages backed by
//! any [`BlogStore`].
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/`, `/index` | Home page |
//! | `GET`  | `/about` | Redirects to `/` |
//! | `GET`  | `/post/category/{name}` | Posts in one category + submission form |
//! | `POST` | `/post/category/{name}` | Form field `post`; redirects back |
//! | `GET`  | `/post/view` | Every post |

pub mod error;
pub mod flash;
pub mod handlers;
pub mod render;

pub use error::Error;

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::{Router, extract::FromRef, routing::get};
use axum_extra::extract::cookie::Key;
use quire_core::store::BlogStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Secret used when none is configured. Fine for local use only.
pub const DEFAULT_SECRET_KEY: &str = "VeryStrongSecretKey123!";

/// Runtime server configuration.
///
/// Layered from built-in defaults, then an optional TOML file, then
/// `QUIRE_*` environment variables (`QUIRE_PORT`, `QUIRE_STORE_PATH`, ...).
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
  pub secret_key: String,
  /// Keep the store in the system temp directory, e.g. on hosts whose
  /// working directory does not survive a redeploy.
  pub ephemeral:  bool,
}

impl ServerConfig {
  pub fn load(file: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", "0.0.0.0")?
      .set_default("port", 5000)?
      .set_default("store_path", "blog.db")?
      .set_default("secret_key", DEFAULT_SECRET_KEY)?
      .set_default("ephemeral", false)?
      .add_source(config::File::from(file.to_path_buf()).required(false))
      .add_source(config::Environment::with_prefix("QUIRE").try_parsing(true))
      .build()?
      .try_deserialize()
  }

  /// Where the SQLite file lives, after applying `ephemeral` and expanding
  /// a leading `~/`.
  pub fn store_location(&self) -> PathBuf {
    if self.ephemeral {
      return std::env::temp_dir().join("blog.db");
    }
    expand_tilde(&self.store_path)
  }

  pub fn uses_default_secret(&self) -> bool {
    self.secret_key == DEFAULT_SECRET_KEY
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: BlogStore> {
  pub store:      Arc<S>,
  /// Signs the flash-message cookie.
  pub cookie_key: Key,
}

impl<S: BlogStore> AppState<S> {
  pub fn new(store: S, secret: &str) -> Self {
    Self {
      store:      Arc::new(store),
      cookie_key: flash::cookie_key(secret),
    }
  }
}

impl<S: BlogStore> FromRef<AppState<S>> for Key {
  fn from_ref(state: &AppState<S>) -> Key { state.cookie_key.clone() }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the blog.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: BlogStore + Clone + 'static,
{
  Router::new()
    .route("/",                     get(handlers::home::home::<S>))
    .route("/index",                get(handlers::home::home::<S>))
    .route("/about",                get(handlers::home::about))
    .route(
      "/post/category/{name}",
      get(handlers::category::show::<S>).post(handlers::category::publish::<S>),
    )
    .route("/post/view",            get(handlers::posts::all::<S>))
    .fallback(handlers::not_found)
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
  };
  use quire_core::{
    category::CategoryId,
    post::{ListedPost, PostId, PostText},
    profile::{Credential, Profile},
  };
  use quire_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  use crate::handlers::category::{EMPTY_POST, PUBLISHED};

  async fn make_state() -> AppState<SqliteStore> {
    let store = SqliteStore::open_in_memory().await.unwrap();
    store.seed().await.unwrap();
    AppState::new(store, "test secret")
  }

  async fn send(
    state:  &AppState<SqliteStore>,
    method: &str,
    uri:    &str,
    cookie: Option<&str>,
    form:   Option<&str>,
  ) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(c) = cookie {
      builder = builder.header(header::COOKIE, c);
    }
    let body = match form {
      Some(f) => {
        builder = builder.header(
          header::CONTENT_TYPE,
          "application/x-www-form-urlencoded",
        );
        Body::from(f.to_string())
      }
      None => Body::empty(),
    };
    router(state.clone())
      .oneshot(builder.body(body).unwrap())
      .await
      .unwrap()
  }

  async fn body_string(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
  }

  fn location(resp: &Response) -> &str {
    resp.headers().get(header::LOCATION).unwrap().to_str().unwrap()
  }

  /// The `name=value` pair of the flash cookie set by `resp`, if any.
  fn flash_cookie(resp: &Response) -> Option<String> {
    resp
      .headers()
      .get_all(header::SET_COOKIE)
      .iter()
      .filter_map(|v| v.to_str().ok())
      .filter_map(|v| v.split(';').next())
      .find(|pair| pair.starts_with(flash::FLASH_COOKIE))
      .map(str::to_owned)
  }

  async fn category_count(state: &AppState<SqliteStore>, name: &str) -> usize {
    state.store.posts_in_category(name).await.unwrap().len()
  }

  // ── Home ───────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn home_greets_profile_owner() {
    let state = make_state().await;
    for uri in ["/", "/index"] {
      let resp = send(&state, "GET", uri, None, None).await;
      assert_eq!(resp.status(), StatusCode::OK);
      let ct = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
      assert!(ct.starts_with("text/html"), "Content-Type: {ct}");
      let html = body_string(resp).await;
      assert!(html.contains("Hello, I'm John Doe!"), "{uri}");
      assert!(html.contains("About John Doe"));
      assert!(html.contains("<title>Welcome - My Blog</title>"));
    }
  }

  #[tokio::test]
  async fn home_without_profile_is_generic() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let state = AppState::new(store, "test secret");

    let html = body_string(send(&state, "GET", "/", None, None).await).await;
    assert!(html.contains("Join our community"));
    assert!(!html.contains(r#"class="about-section""#));
    assert!(html.contains("/post/category/creative"));
  }

  #[tokio::test]
  async fn about_redirects_home() {
    let state = make_state().await;
    let resp  = send(&state, "GET", "/about", None, None).await;
    assert!(resp.status().is_redirection());
    assert_eq!(location(&resp), "/");
  }

  #[tokio::test]
  async fn unknown_path_is_404_page() {
    let state = make_state().await;
    let resp  = send(&state, "GET", "/posts/missing", None, None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let html = body_string(resp).await;
    assert!(html.contains("<title>Page Not Found - My Blog</title>"));
    assert!(html.contains("<code>/posts/missing</code>"));
  }

  // ── Category listing ───────────────────────────────────────────────────────

  #[tokio::test]
  async fn category_lists_posts_newest_first() {
    let state = make_state().await;
    let resp  = send(&state, "GET", "/post/category/tech", None, None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(flash_cookie(&resp).is_none());

    let html = body_string(resp).await;
    assert!(html.contains("<title>Tech Posts - My Blog</title>"));
    assert!(html.contains("Showing 2 posts in tech"));
    assert!(html.contains(r#"<textarea name="post""#));
    assert!(html.find("Post #2").unwrap() < html.find("Post #1").unwrap());
    assert!(!html.contains("Post #3"));
  }

  #[tokio::test]
  async fn unknown_category_redirects_home_with_error_flash() {
    let state = make_state().await;
    let resp  = send(&state, "GET", "/post/category/cooking", None, None).await;
    assert!(resp.status().is_redirection());
    assert_eq!(location(&resp), "/");
    let cookie = flash_cookie(&resp).expect("flash cookie");

    let resp = send(&state, "GET", "/", Some(&cookie), None).await;
    let html = body_string(resp).await;
    assert!(html.contains(r#"<div class="flash error">Category &quot;cooking&quot; not found!</div>"#));
  }

  #[tokio::test]
  async fn unknown_category_post_creates_nothing() {
    let state = make_state().await;
    let resp  = send(&state, "POST", "/post/category/cooking", None, Some("post=hi")).await;
    assert_eq!(location(&resp), "/");
    assert!(flash_cookie(&resp).is_some());
    assert_eq!(state.store.all_posts().await.unwrap().len(), 6);
  }

  #[tokio::test]
  async fn flash_is_shown_once() {
    let state = make_state().await;
    let resp  = send(&state, "GET", "/post/category/cooking", None, None).await;
    let cookie = flash_cookie(&resp).unwrap();

    let shown = send(&state, "GET", "/", Some(&cookie), None).await;
    // The rendering response clears the cookie.
    let cleared = flash_cookie(&shown).expect("removal cookie");
    assert_eq!(cleared, format!("{}=", flash::FLASH_COOKIE));
    assert!(body_string(shown).await.contains("not found!"));

    let again = send(&state, "GET", "/", Some(&cleared), None).await;
    assert!(!body_string(again).await.contains(r#"class="flash-messages"#));
  }

  #[tokio::test]
  async fn tampered_flash_cookie_is_ignored() {
    let state = make_state().await;
    let forged = format!("{}=forged", flash::FLASH_COOKIE);
    let resp = send(&state, "GET", "/", Some(&forged), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(!body_string(resp).await.contains(r#"class="flash-messages"#));
  }

  // ── Submission ─────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn empty_post_is_rejected_with_error_flash() {
    let state = make_state().await;

    for form in ["post=", "post=+++%0A%09", ""] {
      let resp = send(&state, "POST", "/post/category/tech", None, Some(form)).await;
      assert!(resp.status().is_redirection(), "form {form:?}");
      assert_eq!(location(&resp), "/post/category/tech");
      let cookie = flash_cookie(&resp).expect("flash cookie");

      let html = body_string(
        send(&state, "GET", "/post/category/tech", Some(&cookie), None).await,
      )
      .await;
      assert!(html.contains(&format!(r#"<div class="flash error">{EMPTY_POST}</div>"#)));
    }
    assert_eq!(category_count(&state, "tech").await, 2);
  }

  #[tokio::test]
  async fn publish_adds_post_and_redirects_back() {
    let state = make_state().await;

    let resp = send(
      &state,
      "POST",
      "/post/category/tech",
      None,
      Some("post=++Hello+world++"),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/post/category/tech");
    let cookie = flash_cookie(&resp).expect("flash cookie");
    assert_eq!(category_count(&state, "tech").await, 3);

    let html = body_string(
      send(&state, "GET", "/post/category/tech", Some(&cookie), None).await,
    )
    .await;
    assert!(html.contains(&format!(r#"<div class="flash success">{PUBLISHED}</div>"#)));
    assert!(html.contains("Showing 3 posts in tech"));
    assert!(html.find("Post #7").unwrap() < html.find("Post #2").unwrap());
    assert!(html.contains(r#"<div class="post-text">Hello world</div>"#));

    let all = body_string(send(&state, "GET", "/post/view", None, None).await).await;
    assert!(all.find("Post #7").unwrap() < all.find("Post #6").unwrap());
  }

  #[tokio::test]
  async fn published_markup_is_escaped() {
    let state = make_state().await;
    send(
      &state,
      "POST",
      "/post/category/creative",
      None,
      Some("post=%3Cscript%3Ealert(1)%3C%2Fscript%3E"),
    )
    .await;

    let html = body_string(send(&state, "GET", "/post/view", None, None).await).await;
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
  }

  #[tokio::test]
  async fn single_post_category_uses_singular() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    store.seed().await.unwrap();
    store
      .factory()
      .with_conn(|conn| {
        conn.execute("INSERT INTO category (category_name) VALUES ('misc')", [])?;
        Ok(())
      })
      .await
      .unwrap();
    let state = AppState::new(store, "test secret");

    let empty = body_string(send(&state, "GET", "/post/category/misc", None, None).await).await;
    assert!(empty.contains("No posts yet in this category"));
    assert!(empty.contains("No posts yet in Misc"));

    send(&state, "POST", "/post/category/misc", None, Some("post=only")).await;
    let one = body_string(send(&state, "GET", "/post/category/misc", None, None).await).await;
    assert!(one.contains("Showing 1 post in misc"));
  }

  #[tokio::test]
  async fn bodyless_post_to_unknown_category_redirects_home() {
    let state = make_state().await;

    let resp = send(&state, "POST", "/post/category/cooking", None, None).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");
    let cookie = flash_cookie(&resp).expect("flash cookie");

    let html = body_string(send(&state, "GET", "/", Some(&cookie), None).await).await;
    assert!(html.contains("Category &quot;cooking&quot; not found!"));
  }

  #[tokio::test]
  async fn multipart_post_to_unknown_category_redirects_home() {
    let state = make_state().await;
    let req = Request::builder()
      .method("POST")
      .uri("/post/category/cooking")
      .header(header::CONTENT_TYPE, "multipart/form-data; boundary=XYZ")
      .body(Body::from(
        "--XYZ\r\nContent-Disposition: form-data; name=\"post\"\r\n\r\nhi\r\n--XYZ--\r\n",
      ))
      .unwrap();

    let resp = router(state.clone()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");
    assert!(flash_cookie(&resp).is_some());
    assert_eq!(state.store.all_posts().await.unwrap().len(), 6);
  }

  #[tokio::test]
  async fn bodyless_post_to_known_category_counts_as_empty() {
    let state = make_state().await;

    let resp = send(&state, "POST", "/post/category/tech", None, None).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/post/category/tech");
    let cookie = flash_cookie(&resp).expect("flash cookie");

    let html = body_string(
      send(&state, "GET", "/post/category/tech", Some(&cookie), None).await,
    )
    .await;
    assert!(html.contains(&format!(r#"<div class="flash error">{EMPTY_POST}</div>"#)));
    assert_eq!(category_count(&state, "tech").await, 2);
  }

  // ── Store failures ─────────────────────────────────────────────────────────

  const STORE_DETAIL: &str = "disk I/O error at /var/lib/quire/blog.db";

  /// A store whose every call fails.
  #[derive(Clone)]
  struct BrokenStore;

  fn broken() -> std::io::Error { std::io::Error::other(STORE_DETAIL) }

  impl BlogStore for BrokenStore {
    type Error = std::io::Error;

    async fn profile(&self) -> Result<Option<Profile>, Self::Error> { Err(broken()) }

    async fn credential(&self) -> Result<Option<Credential>, Self::Error> {
      Err(broken())
    }

    async fn category_id(&self, _name: &str) -> Result<Option<CategoryId>, Self::Error> {
      Err(broken())
    }

    async fn posts_in_category(&self, _name: &str) -> Result<Vec<ListedPost>, Self::Error> {
      Err(broken())
    }

    async fn all_posts(&self) -> Result<Vec<ListedPost>, Self::Error> { Err(broken()) }

    async fn create_post(
      &self,
      _category_id: CategoryId,
      _text: &PostText,
    ) -> Result<PostId, Self::Error> {
      Err(broken())
    }
  }

  #[tokio::test]
  async fn store_failure_renders_generic_500() {
    let state = AppState::new(BrokenStore, "test secret");

    for (method, uri, form) in [
      ("GET", "/", None),
      ("GET", "/post/view", None),
      ("GET", "/post/category/tech", None),
      ("POST", "/post/category/tech", Some("post=hello")),
    ] {
      let mut builder = Request::builder().method(method).uri(uri);
      if form.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
      }
      let req = builder
        .body(form.map(Body::from).unwrap_or_else(Body::empty))
        .unwrap();

      let resp = router(state.clone()).oneshot(req).await.unwrap();
      assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR, "{method} {uri}");
      assert!(resp.headers().get(header::LOCATION).is_none());
      let html = body_string(resp).await;
      assert!(html.contains("Something Went Wrong"), "{method} {uri}");
      assert!(!html.contains(STORE_DETAIL), "{method} {uri} leaked: {html}");
      assert!(!html.contains("disk I/O"));
    }
  }

  // ── All posts ──────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn all_posts_scenario() {
    let state = make_state().await;

    let html = body_string(send(&state, "GET", "/post/view", None, None).await).await;
    assert!(html.contains("All Blog Posts (6)"));
    let positions: Vec<usize> = (1..=6)
      .rev()
      .map(|id| html.find(&format!("Post #{id}<")).unwrap())
      .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    send(&state, "POST", "/post/category/lifestyle", None, Some("post=Test")).await;

    let posts = state.store.all_posts().await.unwrap();
    assert_eq!(posts.len(), 7);
    assert_eq!(posts[0].post.id.0, 7);
    assert_eq!(posts[0].category_name, "lifestyle");
    assert_eq!(posts[0].post.text, "Test");

    let html = body_string(send(&state, "GET", "/post/view", None, None).await).await;
    assert!(html.contains("All Blog Posts (7)"));
    assert!(html.find("Post #7").unwrap() < html.find("Post #6").unwrap());
    assert!(html.contains(r#"href="/post/category/lifestyle""#));
  }

  // ── Configuration ──────────────────────────────────────────────────────────

  #[test]
  fn config_defaults_apply_without_file() {
    let cfg = ServerConfig::load(Path::new("/nonexistent/quire.toml")).unwrap();
    assert_eq!(cfg.host, "0.0.0.0");
    assert!(cfg.port > 0);
    assert!(!cfg.secret_key.is_empty());
  }

  #[test]
  fn ephemeral_store_lives_in_temp_dir() {
    let cfg = ServerConfig {
      host:       "127.0.0.1".to_string(),
      port:       5000,
      store_path: PathBuf::from("blog.db"),
      secret_key: DEFAULT_SECRET_KEY.to_string(),
      ephemeral:  true,
    };
    assert_eq!(cfg.store_location(), std::env::temp_dir().join("blog.db"));
    assert!(cfg.uses_default_secret());

    let persistent = ServerConfig { ephemeral: false, ..cfg };
    assert_eq!(persistent.store_location(), PathBuf::from("blog.db"));
  }
}
