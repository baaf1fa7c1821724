//! SQL schema for the Quire SQLite store.
//!
//! There are no migrations: the schema is created if missing and left alone
//! otherwise. `PRAGMA user_version` records the layout for future changes.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS category (
    category_id   INTEGER PRIMARY KEY AUTOINCREMENT,
    category_name TEXT NOT NULL UNIQUE CHECK (category_name != '')
);

-- Posts are append-only: no UPDATE or DELETE is ever issued.
CREATE TABLE IF NOT EXISTS post (
    post_id     INTEGER PRIMARY KEY AUTOINCREMENT,
    category_id INTEGER NOT NULL REFERENCES category(category_id),
    text        TEXT NOT NULL,
    created_at  TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
);

-- Blog owner profile; only the first row is ever read.
CREATE TABLE IF NOT EXISTS user (
    id    INTEGER PRIMARY KEY,
    name  TEXT,
    text  TEXT,
    image TEXT
);

CREATE TABLE IF NOT EXISTS users (
    login    TEXT PRIMARY KEY,
    password TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS post_category_idx ON post(category_id);

PRAGMA user_version = 1;
";

/// Applied to every freshly opened connection; SQLite scopes it per
/// connection.
pub const CONNECTION_PRAGMAS: &str = "PRAGMA foreign_keys = ON;";
