use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    error::Error,
    market::ChartQuery,
    model::{api::ErrorDto, app::AppState, market::MarketIndexDto},
};

pub static MARKET_TAG: &str = "market";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartParams {
    pub symbol: String,
    pub interval: Option<String>,
    pub range: Option<String>,
    pub include_pre_post: Option<String>,
    pub events: Option<String>,
}

/// Get chart data for a symbol
///
/// Passes the provider's chart payload through untouched.
#[utoipa::path(
    get,
    path = "/api/market/chart",
    tag = MARKET_TAG,
    params(
        ("symbol" = String, Query, description = "Ticker symbol, e.g. AAPL"),
        ("interval" = Option<String>, Query, description = "Candle interval, defaults to 1d"),
        ("range" = Option<String>, Query, description = "Chart range, defaults to 1mo"),
        ("includePrePost" = Option<String>, Query, description = "Include pre and post market candles, defaults to false"),
        ("events" = Option<String>, Query, description = "Corporate events to include, defaults to div,split"),
    ),
    responses(
        (status = 200, description = "The provider's chart payload"),
        (status = 502, description = "Market data provider unavailable", body = ErrorDto),
    ),
)]
pub async fn chart(
    State(state): State<AppState>,
    Query(params): Query<ChartParams>,
) -> Result<Json<serde_json::Value>, Error> {
    let query = ChartQuery {
        interval: params.interval,
        range: params.range,
        include_pre_post: params.include_pre_post,
        events: params.events,
    };

    let payload = state.market.chart(&params.symbol, &query).await?;

    Ok(Json(payload))
}

/// Get quotes for the major market indices
///
/// Indices the provider fails on come back zeroed with `error` set, so one
/// bad symbol never empties the overview.
#[utoipa::path(
    get,
    path = "/api/market-indices",
    tag = MARKET_TAG,
    responses(
        (status = 200, description = "One entry per tracked index", body = Vec<MarketIndexDto>),
    ),
)]
pub async fn indices(State(state): State<AppState>) -> Json<Vec<MarketIndexDto>> {
    Json(state.market.market_indices().await)
}
