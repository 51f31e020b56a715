use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    error::Error,
    model::{api::ErrorDto, app::AppState, auth::AuthUser, stock::StockDto},
    service::stock::StockService,
};

pub static STOCK_TAG: &str = "stock";

#[derive(Deserialize)]
pub struct SearchParams {
    pub query: String,
}

/// Search stocks by symbol or company name
///
/// Stored rows are searched first; the provider is only consulted when
/// nothing matches locally.
#[utoipa::path(
    get,
    path = "/api/stocks/search",
    tag = STOCK_TAG,
    params(
        ("query" = String, Query, description = "Free text to match against symbols and company names"),
    ),
    responses(
        (status = 200, description = "Matching stocks, empty when the provider is unavailable", body = Vec<StockDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
    ),
)]
pub async fn search(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<StockDto>>, Error> {
    let stock_service = StockService::new(&state.db, &state.market);

    let stocks = stock_service.search(&params.query).await?;

    Ok(Json(stocks.into_iter().map(StockDto::from).collect()))
}

/// Get details for a stock symbol
///
/// A symbol not cached yet is reconciled from the provider first.
#[utoipa::path(
    get,
    path = "/api/stocks/{symbol}",
    tag = STOCK_TAG,
    params(
        ("symbol" = String, Path, description = "Ticker symbol, e.g. AAPL"),
    ),
    responses(
        (status = 200, description = "The stock's stored details", body = StockDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Unknown symbol", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
    ),
)]
pub async fn get_stock(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(symbol): Path<String>,
) -> Result<Json<StockDto>, Error> {
    let stock_service = StockService::new(&state.db, &state.market);

    let stock = stock_service.get_details(&symbol).await?;

    Ok(Json(StockDto::from(stock)))
}
