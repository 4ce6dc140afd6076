use crate::db::{AccountStore, FavoriteStore, SqlitePool};
use crate::github::GitHubClient;
use crate::handlers::{auth, favorites, lookup};

use axum::{
    Router,
    extract::{FromRef, Request},
    http::{HeaderName, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use axum_extra::extract::cookie::Key;
use base64::Engine as _;
use ring::rand::{SecureRandom, SystemRandom};
use std::sync::LazyLock;
use std::time::Instant;
use tracing::{error, info, warn};

/// Global cookie signing/encryption key for PrivateCookieJar. Generated per
/// process, so sessions do not survive a restart.
static COOKIE_KEY: LazyLock<Key> = LazyLock::new(Key::generate);

const MAX_REQUEST_ID_LEN: usize = 128;
const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

fn generate_request_id() -> String {
    // 96 bits => 16 chars base64url (no padding).
    let mut bytes = [0u8; 12];
    let _ = SystemRandom::new().fill(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

#[derive(Clone)]
pub struct GitviewState {
    pub accounts: AccountStore,
    pub favorites: FavoriteStore,
    pub github: GitHubClient,
}

impl GitviewState {
    pub fn new(pool: SqlitePool, github: GitHubClient) -> Self {
        Self {
            accounts: AccountStore::new(pool.clone()),
            favorites: FavoriteStore::new(pool),
            github,
        }
    }
}

impl FromRef<GitviewState> for Key {
    fn from_ref(state: &GitviewState) -> Self {
        let _ = state; // state not used to fetch the static key
        COOKIE_KEY.clone()
    }
}

async fn not_found_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn access_log(req: Request, next: Next) -> Response {
    // Capture request metadata before moving `req` into the handler stack.
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let request_id = req
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_LEN)
        .map(str::to_string)
        .unwrap_or_else(generate_request_id);

    let start = Instant::now();
    let mut resp = next.run(req).await;

    // Always reflect `x-request-id` for easier correlation, even if the client didn't send one.
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        resp.headers_mut().insert(X_REQUEST_ID, value);
    }

    let status = resp.status();
    let latency_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        error!(
            "| {:>3} | {} | {:^7} | {} | {}ms",
            status.as_u16(),
            request_id,
            method.as_str(),
            path,
            latency_ms
        );
    } else if status.is_client_error() {
        warn!(
            "| {:>3} | {} | {:^7} | {} | {}ms",
            status.as_u16(),
            request_id,
            method.as_str(),
            path,
            latency_ms
        );
    } else {
        info!(
            "| {:>3} | {} | {:^7} | {} | {}ms",
            status.as_u16(),
            request_id,
            method.as_str(),
            path,
            latency_ms
        );
    }

    resp
}

pub fn gitview_router(state: GitviewState) -> Router {
    Router::new()
        .route("/lookup", get(lookup::lookup))
        .route("/users/{username}/activity", get(lookup::activity))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/favorites", get(favorites::list))
        .route("/favorites/{github_username}", post(favorites::toggle))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(middleware::from_fn(access_log))
}
