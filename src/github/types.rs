use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GitHub user profile from `GET /users/{username}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
}

/// A public repository from `GET /users/{username}/repos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub html_url: String,
    pub created_at: DateTime<Utc>,
}

/// A commit from `GET /repos/{owner}/{repo}/commits`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub commit: CommitDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitDetail {
    pub message: String,
    #[serde(default)]
    pub author: Option<CommitAuthor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitAuthor {
    pub name: String,
}

/// Order repositories most recently created first. The sort is stable, so
/// repositories sharing a creation timestamp keep their original API order.
pub fn sort_repositories_newest_first(repos: &mut [Repository]) {
    repos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
