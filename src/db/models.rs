use serde::Serialize;
use sqlx::FromRow;

/// A local application account capable of logging in and favoriting
/// GitHub usernames.
///
/// `password_hash` is the encoded PBKDF2 digest, never a plaintext
/// password, and is excluded from serialization so it can't leak into a
/// response body or log line.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, FromRow)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}
