use crate::db::models::Account;
use crate::db::schema::SQLITE_INIT;
use crate::error::GitviewError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

/// Open (and create if missing) the SQLite database behind `database_url`.
pub async fn connect(database_url: &str) -> Result<SqlitePool, GitviewError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    Ok(pool)
}

/// Initialize the schema by executing the bundled DDL.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), GitviewError> {
    // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}

#[derive(Clone)]
pub struct AccountStore {
    pool: SqlitePool,
}

impl AccountStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Account>, GitviewError> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, name, email, password_hash FROM accounts WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(account)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Account>, GitviewError> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, name, email, password_hash FROM accounts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(account)
    }

    /// Insert a new account and return its id.
    ///
    /// Callers are expected to pre-check via `find_by_email`; the UNIQUE
    /// constraint still backstops a concurrent duplicate registration, and
    /// that violation surfaces as `DuplicateEmail`.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<i64, GitviewError> {
        let result = sqlx::query("INSERT INTO accounts (name, email, password_hash) VALUES (?, ?, ?)")
            .bind(name)
            .bind(email)
            .bind(password_hash)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(GitviewError::DuplicateEmail)
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[derive(Clone)]
pub struct FavoriteStore {
    pool: SqlitePool,
}

impl FavoriteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Idempotent insert; adding an existing pair is a no-op.
    pub async fn add(&self, account_id: i64, github_username: &str) -> Result<(), GitviewError> {
        sqlx::query(
            "INSERT OR IGNORE INTO favorites (account_id, github_username) VALUES (?, ?)",
        )
        .bind(account_id)
        .bind(github_username)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Idempotent delete; removing an absent pair is a no-op.
    pub async fn remove(&self, account_id: i64, github_username: &str) -> Result<(), GitviewError> {
        sqlx::query("DELETE FROM favorites WHERE account_id = ? AND github_username = ?")
            .bind(account_id)
            .bind(github_username)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn exists(&self, account_id: i64, github_username: &str) -> Result<bool, GitviewError> {
        let row = sqlx::query("SELECT 1 FROM favorites WHERE account_id = ? AND github_username = ?")
            .bind(account_id)
            .bind(github_username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    /// All usernames favorited by the account, in insertion order.
    pub async fn list_for(&self, account_id: i64) -> Result<Vec<String>, GitviewError> {
        let rows = sqlx::query(
            "SELECT github_username FROM favorites WHERE account_id = ? ORDER BY rowid",
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter()
            .map(|row| row.try_get("github_username").map_err(GitviewError::from))
            .collect()
    }
}
