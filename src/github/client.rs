use crate::error::GitviewError;
use crate::github::activity::Event;
use crate::github::types::{Commit, Profile, Repository, sort_repositories_newest_first};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

const API_BASE_URL: &str = "https://api.github.com";
const PER_PAGE: u32 = 100;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);
const USER_AGENT: &str = concat!("gitview/", env!("CARGO_PKG_VERSION"));

/// Outcome of consulting GitHub for an entity.
///
/// "Does not exist" (404 and other non-200 statuses) and "could not
/// determine" (transport failure, unreadable body) are distinct so callers
/// never have to guess what an empty result means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
    Unreachable,
}

/// Read-only client for the public GitHub REST API. Single attempt per
/// call, fixed timeout, no authentication.
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
}

impl GitHubClient {
    pub fn new(proxy: Option<&Url>) -> Result<Self, GitviewError> {
        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT);
        if let Some(proxy_url) = proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url.as_str())?);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// GET `/users/{username}`.
    pub async fn fetch_user(&self, username: &str) -> Lookup<Profile> {
        let url = format!("{API_BASE_URL}/users/{username}");
        self.get_json(&url).await
    }

    /// GET `/users/{username}/repos`, most recently created first.
    pub async fn fetch_repositories(&self, username: &str) -> Lookup<Vec<Repository>> {
        let url = format!("{API_BASE_URL}/users/{username}/repos?per_page={PER_PAGE}");
        match self.get_json::<Vec<Repository>>(&url).await {
            Lookup::Found(mut repos) => {
                sort_repositories_newest_first(&mut repos);
                Lookup::Found(repos)
            }
            other => other,
        }
    }

    /// GET `/repos/{owner}/{repo}/commits`.
    pub async fn fetch_commits(&self, owner: &str, repo: &str) -> Lookup<Vec<Commit>> {
        let url = format!("{API_BASE_URL}/repos/{owner}/{repo}/commits");
        self.get_json(&url).await
    }

    /// GET `/users/{username}/events` (recent public activity).
    pub async fn fetch_events(&self, username: &str) -> Lookup<Vec<Event>> {
        let url = format!("{API_BASE_URL}/users/{username}/events");
        self.get_json(&url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Lookup<T> {
        let response = match self
            .client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!(url, error = %err, "GitHub request failed to complete");
                return Lookup::Unreachable;
            }
        };

        match response.status() {
            StatusCode::OK => match response.json::<T>().await {
                Ok(value) => Lookup::Found(value),
                Err(err) => {
                    warn!(url, error = %err, "GitHub response body could not be decoded");
                    Lookup::Unreachable
                }
            },
            StatusCode::NOT_FOUND => Lookup::NotFound,
            status => {
                // Treated the same as 404: the entity is absent as far as
                // this unauthenticated, single-attempt client can tell.
                debug!(url, status = %status, "GitHub returned a non-200 status");
                Lookup::NotFound
            }
        }
    }
}
