use crate::GitviewError;
use crate::auth::SessionAccount;
use crate::router::GitviewState;
use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
pub struct FavoriteToggleResponse {
    pub github_username: String,
    pub favorited: bool,
}

/// POST /favorites/{github_username} -> toggles the favorite for the
/// logged-in account. The username is not checked against GitHub; a
/// favorite may reference an account that doesn't exist.
pub async fn toggle(
    State(state): State<GitviewState>,
    session: SessionAccount,
    Path(github_username): Path<String>,
) -> Result<Json<FavoriteToggleResponse>, GitviewError> {
    let account_id = session.require()?;

    let favorited = if state.favorites.exists(account_id, &github_username).await? {
        state.favorites.remove(account_id, &github_username).await?;
        false
    } else {
        state.favorites.add(account_id, &github_username).await?;
        true
    };

    info!(account_id, github_username = %github_username, favorited, "favorite toggled");
    Ok(Json(FavoriteToggleResponse {
        github_username,
        favorited,
    }))
}

#[derive(Debug, Serialize)]
pub struct FavoritesListResponse {
    pub favorites: Vec<String>,
}

/// GET /favorites -> the logged-in account's favorited usernames.
pub async fn list(
    State(state): State<GitviewState>,
    session: SessionAccount,
) -> Result<Json<FavoritesListResponse>, GitviewError> {
    let account_id = session.require()?;
    let favorites = state.favorites.list_for(account_id).await?;
    Ok(Json(FavoritesListResponse { favorites }))
}
