//! SQL DDL for initializing the database schema.

/// The `clients` table.
///
/// `AUTOINCREMENT` keeps SQLite from handing out the id of a deleted row
/// again. `created_at` is stored as `YYYY-MM-DD HH:MM:SS` text.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS clients (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NULL,
    company TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL
)
"#;
