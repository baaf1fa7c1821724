//! [`SqliteStore`] — the SQLite implementation of [`BlogStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use quire_core::{
  category::CategoryId,
  post::{ListedPost, PostId, PostText},
  profile::{Credential, Profile},
  store::BlogStore,
};

use crate::{
  ConnectionFactory, Result,
  encode::{LISTED_POST_COLUMNS, RawListedPost},
  schema::SCHEMA,
  seed::{self, SeedReport},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Quire blog store backed by a single SQLite database.
///
/// Cloning is cheap — the store only carries its [`ConnectionFactory`].
#[derive(Clone)]
pub struct SqliteStore {
  factory: ConnectionFactory,
}

impl SqliteStore {
  /// Build a store over an existing factory. The schema is not touched.
  pub fn new(factory: ConnectionFactory) -> Self { Self { factory } }

  /// Open (or create) a store at `path` and ensure the schema exists.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let store = Self::new(ConnectionFactory::file(path));
    store.ensure_schema().await?;
    Ok(store)
  }

  /// Open a private in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let store = Self::new(ConnectionFactory::memory().await?);
    store.ensure_schema().await?;
    Ok(store)
  }

  pub fn factory(&self) -> &ConnectionFactory { &self.factory }

  /// Create the four relations if they are missing. Existing data is kept.
  pub async fn ensure_schema(&self) -> Result<()> {
    self
      .factory
      .with_conn(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await
  }

  /// Insert the fixed categories, profile, credential and sample posts.
  pub async fn seed(&self) -> Result<SeedReport> {
    let report = self
      .factory
      .with_conn(|conn| {
        let tx = conn.transaction()?;
        let report = seed::seed(&tx)?;
        tx.commit()?;
        Ok(report)
      })
      .await?;

    tracing::debug!(
      categories = report.categories,
      posts = report.posts,
      "seed data applied"
    );
    Ok(report)
  }

  /// [`ensure_schema`](Self::ensure_schema) followed by
  /// [`seed`](Self::seed).
  pub async fn initialize(&self) -> Result<SeedReport> {
    self.ensure_schema().await?;
    self.seed().await
  }

  async fn listed_posts(
    &self,
    category: Option<String>,
  ) -> Result<Vec<ListedPost>> {
    let raws: Vec<RawListedPost> = self
      .factory
      .with_conn(move |conn| {
        let rows = if let Some(name) = category {
          let mut stmt = conn.prepare(&format!(
            "SELECT {LISTED_POST_COLUMNS}
             FROM post p
             JOIN category c ON c.category_id = p.category_id
             WHERE c.category_name = ?1
             ORDER BY p.post_id DESC"
          ))?;
          stmt
            .query_map(rusqlite::params![name], RawListedPost::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        } else {
          let mut stmt = conn.prepare(&format!(
            "SELECT {LISTED_POST_COLUMNS}
             FROM post p
             JOIN category c ON c.category_id = p.category_id
             ORDER BY p.post_id DESC"
          ))?;
          stmt
            .query_map([], RawListedPost::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        };
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawListedPost::into_listed).collect()
  }
}

// ─── BlogStore impl ──────────────────────────────────────────────────────────

impl BlogStore for SqliteStore {
  type Error = crate::Error;

  async fn profile(&self) -> Result<Option<Profile>> {
    self
      .factory
      .with_conn(|conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, name, text, image FROM user ORDER BY rowid LIMIT 1",
              [],
              |row| {
                Ok(Profile {
                  id:    row.get(0)?,
                  name:  row.get(1)?,
                  bio:   row.get(2)?,
                  image: row.get(3)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await
  }

  async fn credential(&self) -> Result<Option<Credential>> {
    self
      .factory
      .with_conn(|conn| {
        Ok(
          conn
            .query_row(
              "SELECT login, password FROM users ORDER BY rowid LIMIT 1",
              [],
              |row| {
                Ok(Credential {
                  login:    row.get(0)?,
                  password: row.get(1)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await
  }

  async fn category_id(&self, name: &str) -> Result<Option<CategoryId>> {
    let name = name.to_owned();

    self
      .factory
      .with_conn(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT category_id FROM category WHERE category_name = ?1",
              rusqlite::params![name],
              |row| row.get(0).map(CategoryId),
            )
            .optional()?,
        )
      })
      .await
  }

  async fn posts_in_category(&self, name: &str) -> Result<Vec<ListedPost>> {
    self.listed_posts(Some(name.to_owned())).await
  }

  async fn all_posts(&self) -> Result<Vec<ListedPost>> {
    self.listed_posts(None).await
  }

  async fn create_post(
    &self,
    category_id: CategoryId,
    text: &PostText,
  ) -> Result<PostId> {
    let text = text.as_str().to_owned();

    let id = self
      .factory
      .with_conn(move |conn| {
        conn.execute(
          "INSERT INTO post (category_id, text) VALUES (?1, ?2)",
          rusqlite::params![category_id.0, text],
        )?;
        Ok(PostId(conn.last_insert_rowid()))
      })
      .await?;

    tracing::debug!(post_id = %id, category_id = %category_id, "post created");
    Ok(id)
  }
}
