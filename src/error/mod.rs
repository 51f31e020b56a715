//! Error types for the Watchdeck server.
//!
//! Each domain (authentication, configuration, market data gateway, stocks,
//! watchlists) has its own error enum built with `thiserror`. All of them
//! implement `IntoResponse` so handlers can return them directly, and the
//! top-level [`Error`] aggregates them for use with the `?` operator.

pub mod auth;
pub mod config;
pub mod market;
pub mod stock;
pub mod watchlist;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{
        auth::AuthError, config::ConfigError, market::MarketError, stock::StockError,
        watchlist::WatchlistError,
    },
    model::api::ErrorDto,
};

/// Main error type for the Watchdeck server.
///
/// Aggregates the domain-specific error types and external library errors into
/// a single unified type. `#[from]` conversions let lower layers bubble errors
/// up with `?`; the `IntoResponse` implementation maps each variant to the
/// HTTP response its domain defines.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (token validation, OAuth exchange, user lookup).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Market data gateway error (upstream request or payload issues).
    #[error(transparent)]
    MarketError(#[from] MarketError),
    /// Stock domain error (unknown symbol).
    #[error(transparent)]
    StockError(#[from] StockError),
    /// Watchlist domain error (missing watchlist or membership row).
    #[error(transparent)]
    WatchlistError(#[from] WatchlistError),
    /// Request validation error (malformed input from the client).
    #[error("Invalid request: {0}")]
    Validation(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::MarketError(err) => err.into_response(),
            Self::StockError(err) => err.into_response(),
            Self::WatchlistError(err) => err.into_response(),
            Self::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto { error: message }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the full error message for debugging but returns a generic message to
/// the client so internal details never leak into API responses.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
