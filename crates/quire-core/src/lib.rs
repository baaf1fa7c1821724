//! Core types and trait definitions for the Quire blog.
//!
//! This crate is deliberately free of HTTP and database dependencies. The
//! store backend and the web layer both depend on it.

pub mod category;
pub mod error;
pub mod post;
pub mod profile;
pub mod store;

pub use error::{Error, Result};
