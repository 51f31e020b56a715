use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    error::Error,
    model::{api::ErrorDto, app::AppState, earnings::EarningsCalendarDto},
    service::earnings::EarningsService,
};

pub static EARNINGS_TAG: &str = "earnings";

#[derive(Deserialize)]
pub struct CalendarParams {
    #[serde(default)]
    pub week: i32,
    pub symbol: Option<String>,
}

/// Get the earnings calendar for a week
///
/// Week 0 is the current one, -1 the previous, 1 the next. Current and
/// future weeks refresh from the provider; past weeks are served from
/// storage when enough events are held.
#[utoipa::path(
    get,
    path = "/api/earnings",
    tag = EARNINGS_TAG,
    params(
        ("week" = Option<i32>, Query, description = "Weeks away from the current one, defaults to 0"),
        ("symbol" = Option<String>, Query, description = "Only report this ticker symbol, any casing"),
    ),
    responses(
        (status = 200, description = "The week's events, flat and grouped by day", body = EarningsCalendarDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 502, description = "Market data provider failure during refresh", body = ErrorDto),
    ),
)]
pub async fn calendar(
    State(state): State<AppState>,
    Query(params): Query<CalendarParams>,
) -> Result<Json<EarningsCalendarDto>, Error> {
    let earnings_service = EarningsService::new(
        &state.db,
        &state.market,
        state.earnings_refresh_threshold,
    );

    let calendar = earnings_service
        .get_calendar(params.week, params.symbol.as_deref())
        .await?;

    Ok(Json(calendar))
}
