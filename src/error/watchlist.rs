use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum WatchlistError {
    #[error("Watchlist with ID {0} not found")]
    WatchlistNotFound(i32),
    #[error("Stock {0} is not in this watchlist")]
    StockNotInWatchlist(String),
}

impl IntoResponse for WatchlistError {
    fn into_response(self) -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
