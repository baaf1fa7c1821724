//! [`ConnectionFactory`] — hands out one fresh connection per operation.

use std::path::{Path, PathBuf};

use tokio_rusqlite::Connection;
use uuid::Uuid;

use crate::{Result, schema::CONNECTION_PRAGMAS};

/// Opens connections to one SQLite database.
///
/// Cloning is cheap. The factory holds no open connection for file-backed
/// databases; for in-memory databases it holds a single idle anchor
/// connection, since SQLite drops a shared in-memory database as soon as its
/// last connection closes.
#[derive(Clone)]
pub struct ConnectionFactory {
  target: Target,
}

#[derive(Clone)]
enum Target {
  File(PathBuf),
  Memory {
    uri:     String,
    _anchor: Connection,
  },
}

impl ConnectionFactory {
  /// A factory for the database file at `path`. Nothing is opened yet.
  pub fn file(path: impl AsRef<Path>) -> Self {
    Self { target: Target::File(path.as_ref().to_path_buf()) }
  }

  /// A factory for a private, uniquely named in-memory database.
  pub async fn memory() -> Result<Self> {
    let uri = format!(
      "file:quire-{}?mode=memory&cache=shared",
      Uuid::new_v4().simple()
    );
    let anchor = Connection::open(&uri).await?;
    Ok(Self { target: Target::Memory { uri, _anchor: anchor } })
  }

  /// A human-readable location, for logs.
  pub fn location(&self) -> String {
    match &self.target {
      Target::File(path) => path.display().to_string(),
      Target::Memory { uri, .. } => uri.clone(),
    }
  }

  /// Open a new connection with per-connection pragmas applied.
  pub async fn open(&self) -> Result<Connection> {
    let conn = match &self.target {
      Target::File(path) => Connection::open(path).await?,
      Target::Memory { uri, .. } => Connection::open(uri).await?,
    };
    conn
      .call(|conn| {
        conn.execute_batch(CONNECTION_PRAGMAS)?;
        Ok(())
      })
      .await?;
    Ok(conn)
  }

  /// Run `f` on a fresh connection, then close it.
  ///
  /// The connection is closed whether or not `f` succeeded.
  pub async fn with_conn<F, R>(&self, f: F) -> Result<R>
  where
    F: FnOnce(&mut rusqlite::Connection) -> tokio_rusqlite::Result<R>
      + Send
      + 'static,
    R: Send + 'static,
  {
    let conn = self.open().await?;
    let result = conn.call(f).await;
    if let Err(e) = conn.close().await {
      tracing::warn!(error = %e, "failed to close sqlite connection");
    }
    Ok(result?)
  }
}
