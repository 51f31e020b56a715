use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single earnings report event, flattened with its stock's identity.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EarningsEventDto {
    pub id: i32,
    pub symbol: String,
    pub company_name: Option<String>,
    /// ISO date (YYYY-MM-DD) the report lands on.
    pub earnings_date: String,
    /// "BMO" (before market open) or "AMC" (after market close) when known.
    pub earnings_time: Option<String>,
    pub eps_estimate: Option<f64>,
    pub eps_actual: Option<f64>,
    pub revenue_estimate: Option<f64>,
    pub revenue_actual: Option<f64>,
    pub fiscal_quarter: Option<String>,
    pub fiscal_year: Option<String>,
}

impl EarningsEventDto {
    pub fn from_event(event: entity::earnings_event::Model, stock: &entity::stock::Model) -> Self {
        Self {
            id: event.id,
            symbol: stock.symbol.clone(),
            company_name: stock.name.clone(),
            earnings_date: event.earnings_date.to_string(),
            earnings_time: event.earnings_time,
            eps_estimate: event.eps_estimate,
            eps_actual: event.eps_actual,
            revenue_estimate: event.revenue_estimate,
            revenue_actual: event.revenue_actual,
            fiscal_quarter: event.fiscal_quarter,
            fiscal_year: event.fiscal_year,
        }
    }
}

/// One calendar week of earnings events, both flat and grouped by day, plus
/// the week offsets to request for pagination.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EarningsCalendarDto {
    /// Sunday opening the requested week, as an ISO date.
    pub week_start: String,
    /// Saturday closing the requested week, as an ISO date.
    pub week_end: String,
    /// Events keyed by their ISO date, sorted ascending.
    pub earnings_by_date: BTreeMap<String, Vec<EarningsEventDto>>,
    /// The same events as a flat list ordered by date.
    pub earnings: Vec<EarningsEventDto>,
    /// Offset to request for the week before this one.
    pub previous_week: String,
    /// Offset this calendar was requested with.
    pub current_week: String,
    /// Offset to request for the week after this one.
    pub next_week: String,
}
