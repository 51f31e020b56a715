use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("Market data request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("Market data provider returned status {status} for {endpoint}")]
    UpstreamStatus {
        endpoint: String,
        status: reqwest::StatusCode,
    },
}

impl IntoResponse for MarketError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto {
                error: "Market data provider is unavailable".to_string(),
            }),
        )
            .into_response()
    }
}
