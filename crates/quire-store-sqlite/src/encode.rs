//! Decoding helpers between SQLite rows and domain types.
//!
//! `created_at` is filled in by SQLite's `CURRENT_TIMESTAMP`, which produces
//! `YYYY-MM-DD HH:MM:SS` in UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use quire_core::{
  category::CategoryId,
  post::{ListedPost, Post, PostId},
};

use crate::{Error, Result};

const SQLITE_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

pub fn decode_timestamp(s: &str) -> Result<DateTime<Utc>> {
  if let Ok(naive) = NaiveDateTime::parse_from_str(s, SQLITE_TIMESTAMP) {
    return Ok(naive.and_utc());
  }
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Raw rows ─────────────────────────────────────────────────────────────────

/// A `post JOIN category` row exactly as read from SQLite.
pub struct RawListedPost {
  pub post_id:       i64,
  pub category_id:   i64,
  pub text:          String,
  pub created_at:    String,
  pub category_name: String,
}

impl RawListedPost {
  /// Column order must match [`LISTED_POST_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      post_id:       row.get(0)?,
      category_id:   row.get(1)?,
      text:          row.get(2)?,
      created_at:    row.get(3)?,
      category_name: row.get(4)?,
    })
  }

  pub fn into_listed(self) -> Result<ListedPost> {
    Ok(ListedPost {
      post:          Post {
        id:          PostId(self.post_id),
        category_id: CategoryId(self.category_id),
        text:        self.text,
        created_at:  decode_timestamp(&self.created_at)?,
      },
      category_name: self.category_name,
    })
  }
}

pub const LISTED_POST_COLUMNS: &str =
  "p.post_id, p.category_id, p.text, p.created_at, c.category_name";

#[cfg(test)]
mod tests {
  use chrono::{Datelike, Timelike};

  use super::*;

  #[test]
  fn decodes_sqlite_current_timestamp() {
    let dt = decode_timestamp("2025-03-14 15:09:26").unwrap();
    assert_eq!((dt.year(), dt.month(), dt.day()), (2025, 3, 14));
    assert_eq!((dt.hour(), dt.minute(), dt.second()), (15, 9, 26));
  }

  #[test]
  fn decodes_rfc3339() {
    let dt = decode_timestamp("2025-03-14T15:09:26+02:00").unwrap();
    assert_eq!(dt.hour(), 13);
  }

  #[test]
  fn rejects_garbage() {
    assert!(matches!(decode_timestamp("yesterday"), Err(Error::DateParse(_))));
  }
}
