//! quire server binary.
//!
//! Reads `config.toml` (or the path given with `--config`) layered under
//! `QUIRE_*` environment variables, creates and seeds the SQLite store if
//! needed, and serves the blog over HTTP.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use quire_store_sqlite::SqliteStore;
use quire_web::{AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Quire personal blog server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  if server_cfg.uses_default_secret() {
    tracing::warn!("QUIRE_SECRET_KEY is not set; flash cookies use the built-in secret");
  }

  let store_path = server_cfg.store_location();
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;
  let seeded = store
    .seed()
    .await
    .context("failed to seed store")?;
  tracing::info!(
    store = %store_path.display(),
    new_categories = seeded.categories,
    new_posts = seeded.posts,
    "store ready"
  );

  let app = quire_web::router(AppState::new(store, &server_cfg.secret_key));
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
