use crate::GitviewError;
use crate::auth::SessionAccount;
use crate::github::{ActivityEntry, Commit, Lookup, Profile, Repository, summarize};
use crate::router::GitviewState;
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    pub username: String,
    pub repo: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub profile: Profile,
    pub repositories: Vec<Repository>,
    pub selected_repo: Option<String>,
    pub commits: Vec<Commit>,
    pub favorited: bool,
}

/// GET /lookup?username=..&repo=.. -> profile, repositories, and commits
/// for the optionally selected repository, plus whether the logged-in
/// account has favorited the profile.
pub async fn lookup(
    State(state): State<GitviewState>,
    session: SessionAccount,
    Query(query): Query<LookupQuery>,
) -> Result<Json<LookupResponse>, GitviewError> {
    let profile = match state.github.fetch_user(&query.username).await {
        Lookup::Found(profile) => profile,
        Lookup::NotFound => return Err(GitviewError::NotFound),
        Lookup::Unreachable => return Err(GitviewError::Unreachable),
    };

    let repositories = match state.github.fetch_repositories(&query.username).await {
        Lookup::Found(repositories) => repositories,
        // The profile resolved, so an absent repo listing just reads as
        // "no repositories" rather than failing the whole page.
        Lookup::NotFound => Vec::new(),
        Lookup::Unreachable => return Err(GitviewError::Unreachable),
    };

    let commits = match &query.repo {
        Some(repo) => match state.github.fetch_commits(&query.username, repo).await {
            Lookup::Found(commits) => commits,
            Lookup::NotFound => Vec::new(),
            Lookup::Unreachable => return Err(GitviewError::Unreachable),
        },
        None => Vec::new(),
    };

    let favorited = match session.0 {
        Some(account_id) => state.favorites.exists(account_id, &profile.login).await?,
        None => false,
    };

    Ok(Json(LookupResponse {
        profile,
        repositories,
        selected_repo: query.repo,
        commits,
        favorited,
    }))
}

#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    pub username: String,
    pub activity: Vec<ActivityEntry>,
}

/// GET /users/{username}/activity -> summarized recent public events.
pub async fn activity(
    State(state): State<GitviewState>,
    Path(username): Path<String>,
) -> Result<Json<ActivityResponse>, GitviewError> {
    let events = match state.github.fetch_events(&username).await {
        Lookup::Found(events) => events,
        Lookup::NotFound => return Err(GitviewError::NotFound),
        Lookup::Unreachable => return Err(GitviewError::Unreachable),
    };

    Ok(Json(ActivityResponse {
        activity: summarize(&events),
        username,
    }))
}
