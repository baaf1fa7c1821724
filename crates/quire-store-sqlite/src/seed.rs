//! Fixed initial rows, inserted idempotently at startup.

use rusqlite::{OptionalExtension as _, Transaction};

/// Category names, in id order.
pub const CATEGORIES: [&str; 3] = ["tech", "lifestyle", "creative"];

pub const PROFILE_NAME: &str = "John Doe";
pub const PROFILE_BIO: &str = "Welcome to my personal blog where I share \
  thoughts about technology, lifestyle, and creativity. Join me on this \
  journey of discovery and learning!";

pub const CREDENTIAL_LOGIN: &str = "admin";
pub const CREDENTIAL_PASSWORD: &str = "password123";

/// Sample posts as `(category name, text)`, in insertion order.
pub const POSTS: [(&str, &str); 6] = [
  (
    "tech",
    "The Future of Web Development: Exploring new frameworks and technologies \
     that are shaping how we build websites. From AI integration to improved \
     performance, the web is evolving rapidly.",
  ),
  (
    "tech",
    "Understanding Rust Web Services: A practical guide to building web \
     applications with axum. Learn about routing, templates, and database \
     integration step by step.",
  ),
  (
    "lifestyle",
    "Mindful Living in the Digital Age: How to maintain balance while staying \
     connected. Tips for reducing screen time and improving mental well-being \
     in our modern world.",
  ),
  (
    "lifestyle",
    "Healthy Morning Routines: Start your day right with these simple but \
     effective habits that can transform your productivity and mood \
     throughout the day.",
  ),
  (
    "creative",
    "The Art of Creative Writing: Techniques for developing compelling \
     characters and engaging storylines that keep readers hooked from start \
     to finish.",
  ),
  (
    "creative",
    "Photography as Self-Expression: Capturing moments and emotions through \
     the lens. Learn composition techniques and develop your unique \
     photographic style.",
  ),
];

/// What a seeding pass actually inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
  pub categories: usize,
  pub posts:      usize,
}

/// Insert the seed rows inside `tx`. Safe to run any number of times.
///
/// Sample posts are deduplicated on their exact `(category_id, text)` pair.
/// That check belongs to seeding only; the public write path never
/// deduplicates.
pub fn seed(tx: &Transaction<'_>) -> rusqlite::Result<SeedReport> {
  let mut report = SeedReport::default();

  for name in CATEGORIES {
    report.categories += tx.execute(
      "INSERT OR IGNORE INTO category (category_name) VALUES (?1)",
      rusqlite::params![name],
    )?;
  }

  tx.execute(
    "INSERT OR REPLACE INTO user (id, name, text, image) VALUES (1, ?1, ?2, NULL)",
    rusqlite::params![PROFILE_NAME, PROFILE_BIO],
  )?;

  tx.execute(
    "INSERT OR REPLACE INTO users (login, password) VALUES (?1, ?2)",
    rusqlite::params![CREDENTIAL_LOGIN, CREDENTIAL_PASSWORD],
  )?;

  for (category, text) in POSTS {
    let category_id: Option<i64> = tx
      .query_row(
        "SELECT category_id FROM category WHERE category_name = ?1",
        rusqlite::params![category],
        |r| r.get(0),
      )
      .optional()?;
    let Some(category_id) = category_id else { continue };

    let existing: i64 = tx.query_row(
      "SELECT COUNT(*) FROM post WHERE category_id = ?1 AND text = ?2",
      rusqlite::params![category_id, text],
      |r| r.get(0),
    )?;
    if existing == 0 {
      report.posts += tx.execute(
        "INSERT INTO post (category_id, text) VALUES (?1, ?2)",
        rusqlite::params![category_id, text],
      )?;
    }
  }

  Ok(report)
}
