use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum GitviewError {
    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("GitHub user or repository not found")]
    NotFound,

    #[error("could not reach GitHub; try again later")]
    Unreachable,

    #[error("this e-mail address is already registered")]
    DuplicateEmail,

    #[error("invalid e-mail or password")]
    InvalidCredentials,

    #[error("you must be logged in to do that")]
    Unauthenticated,
}

impl IntoResponse for GitviewError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            GitviewError::NotFound => {
                let body = ApiErrorBody {
                    code: "NOT_FOUND".to_string(),
                    message: self.to_string(),
                };
                (StatusCode::NOT_FOUND, body)
            }
            GitviewError::Unreachable => {
                let body = ApiErrorBody {
                    code: "GITHUB_UNREACHABLE".to_string(),
                    message: self.to_string(),
                };
                (StatusCode::BAD_GATEWAY, body)
            }
            GitviewError::DuplicateEmail => {
                let body = ApiErrorBody {
                    code: "DUPLICATE_EMAIL".to_string(),
                    message: self.to_string(),
                };
                (StatusCode::CONFLICT, body)
            }
            GitviewError::InvalidCredentials => {
                let body = ApiErrorBody {
                    code: "INVALID_CREDENTIALS".to_string(),
                    message: self.to_string(),
                };
                (StatusCode::UNAUTHORIZED, body)
            }
            GitviewError::Unauthenticated => {
                let body = ApiErrorBody {
                    code: "LOGIN_REQUIRED".to_string(),
                    message: self.to_string(),
                };
                (StatusCode::UNAUTHORIZED, body)
            }
            GitviewError::Database(ref err) => {
                error!("database error: {err}");
                let body = ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
            GitviewError::Reqwest(ref err) => {
                error!("upstream request error: {err}");
                let body = ApiErrorBody {
                    code: "BAD_GATEWAY".to_string(),
                    message: "Upstream service is unavailable.".to_string(),
                };
                (StatusCode::BAD_GATEWAY, body)
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
