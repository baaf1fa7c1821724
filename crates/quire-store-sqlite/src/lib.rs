//! SQLite backend for the Quire blog store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs off the async
//! runtime. Each store operation opens its own connection through a
//! [`ConnectionFactory`] and closes it before returning.

mod connection;
mod encode;
mod schema;
mod seed;
mod store;

pub mod error;

pub use connection::ConnectionFactory;
pub use error::{Error, Result};
pub use seed::SeedReport;
pub use store::SqliteStore;
