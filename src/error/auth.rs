use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{error::InternalServerError, model::api::ErrorDto};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authorization header is missing or does not carry a bearer token")]
    MissingBearerToken,
    #[error("Bearer token failed validation")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
    #[error("User ID {0:?} not found in database despite presenting a valid token")]
    UserNotInDatabase(i32),
    #[error("Failed to exchange authorization code with identity provider: {0}")]
    CodeExchangeFailed(String),
    #[error("Failed to fetch user profile from identity provider: {0}")]
    UserInfoFailed(String),
    #[error("Failed to build the OAuth HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

impl AuthError {
    fn unauthorized() -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Unauthorized".to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingBearerToken => {
                tracing::debug!("{}", Self::MissingBearerToken);

                Self::unauthorized()
            }
            Self::InvalidToken(_) => {
                tracing::debug!("{}", self);

                Self::unauthorized()
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(
                    user_id = %user_id,
                    "{}",
                    self
                );

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "User not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::CodeExchangeFailed(_) | Self::UserInfoFailed(_) | Self::ClientBuild(_) => {
                InternalServerError(self).into_response()
            }
        }
    }
}
