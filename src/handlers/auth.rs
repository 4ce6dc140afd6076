use crate::GitviewError;
use crate::auth::{password, session};
use crate::db::Account;
use crate::router::GitviewState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::cookie::PrivateCookieJar;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Account fields safe to put on the wire. The password hash never leaves
/// the store.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            email: account.email,
        }
    }
}

/// POST /auth/register -> creates a local account.
pub async fn register(
    State(state): State<GitviewState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, GitviewError> {
    if state.accounts.find_by_email(&req.email).await?.is_some() {
        return Err(GitviewError::DuplicateEmail);
    }

    let password_hash = password::hash(&req.password);
    let id = state
        .accounts
        .create(&req.name, &req.email, &password_hash)
        .await?;

    info!(account_id = id, "registered new account");
    Ok((
        StatusCode::CREATED,
        Json(AccountResponse {
            id,
            name: req.name,
            email: req.email,
        }),
    ))
}

/// POST /auth/login -> verifies credentials and opens a session.
///
/// Unknown e-mail and wrong password are deliberately indistinguishable.
pub async fn login(
    State(state): State<GitviewState>,
    jar: PrivateCookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, GitviewError> {
    let account = state
        .accounts
        .find_by_email(&req.email)
        .await?
        .ok_or(GitviewError::InvalidCredentials)?;

    if !password::verify(&req.password, &account.password_hash) {
        return Err(GitviewError::InvalidCredentials);
    }

    info!(account_id = account.id, "session opened");
    let jar = session::login(jar, account.id);
    Ok((jar, Json(AccountResponse::from(account))))
}

/// POST /auth/logout -> closes the session. Always succeeds.
pub async fn logout(jar: PrivateCookieJar) -> impl IntoResponse {
    let jar = session::logout(jar);
    (jar, Json(serde_json::json!({ "logged_out": true })))
}
