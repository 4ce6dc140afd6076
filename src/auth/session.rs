//! Explicit session-lookup capability.
//!
//! The current account id travels in a private (encrypted and signed)
//! cookie. Handlers receive it through the `SessionAccount` extractor,
//! which never rejects; the data layer never sees sessions at all.

use crate::error::GitviewError;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, Key, PrivateCookieJar, SameSite};
use std::convert::Infallible;
use time::Duration;

const SESSION_COOKIE: &str = "gitview_session";
const SESSION_MAX_AGE_DAYS: i64 = 7;

/// The account id carried by the request's session cookie, if any.
#[derive(Debug, Clone, Copy)]
pub struct SessionAccount(pub Option<i64>);

impl SessionAccount {
    /// The account id, or `Unauthenticated` when there is no session.
    pub fn require(&self) -> Result<i64, GitviewError> {
        self.0.ok_or(GitviewError::Unauthenticated)
    }
}

impl<S> FromRequestParts<S> for SessionAccount
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar: PrivateCookieJar = match PrivateCookieJar::from_request_parts(parts, state).await {
            Ok(jar) => jar,
            Err(err) => match err {},
        };
        let account_id = jar
            .get(SESSION_COOKIE)
            .and_then(|cookie| cookie.value().parse().ok());
        Ok(Self(account_id))
    }
}

/// Attach a session for `account_id` to the jar.
pub fn login(jar: PrivateCookieJar, account_id: i64) -> PrivateCookieJar {
    jar.add(
        Cookie::build(Cookie::new(SESSION_COOKIE.to_string(), account_id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(Duration::days(SESSION_MAX_AGE_DAYS))
            .build(),
    )
}

/// Drop any session carried by the jar.
pub fn logout(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.remove(
        Cookie::build(Cookie::new(SESSION_COOKIE.to_string(), String::new()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build(),
    )
}
