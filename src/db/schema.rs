//! SQL DDL for initializing the account and favorites storage.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `accounts.id` INTEGER PRIMARY KEY AUTOINCREMENT
/// - `accounts.email` UNIQUE (creates an index implicitly)
/// - `favorites` keyed on the (account_id, github_username) pair, so a
///   duplicate favorite is rejected at the storage layer and
///   `INSERT OR IGNORE` makes adds idempotent
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS favorites (
    account_id INTEGER NOT NULL REFERENCES accounts(id),
    github_username TEXT NOT NULL,
    PRIMARY KEY (account_id, github_username)
);

CREATE INDEX IF NOT EXISTS idx_favorites_account_id ON favorites(account_id);
"#;
