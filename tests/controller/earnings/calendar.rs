use axum::extract::{Query, State};
use chrono::{Duration, Utc};
use mockito::Matcher;
use watchdeck::controller::earnings::{calendar, CalendarParams};
use watchdeck_test_utils::prelude::*;

use crate::setup::{app_setup, TEST_REFRESH_THRESHOLD};

fn params(week: i32) -> CalendarParams {
    CalendarParams { week, symbol: None }
}

/// Expect the current week refreshed from the provider and grouped by day
#[tokio::test]
async fn refreshes_and_groups_current_week() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = app_setup().await?;

    let today = Utc::now().date_naive();
    let payload = market::factory::earnings_payload(vec![
        market::factory::earnings_item("AAPL", "Apple Inc.", &today.to_string()),
        market::factory::earnings_item("MSFT", "Microsoft", &today.to_string()),
    ]);
    market::mockito::mock_earnings_endpoint(&mut app.test.server, payload).await;

    let dto = calendar(State(app.state), Query(params(0))).await?.0;

    let day = dto
        .earnings_by_date
        .get(&today.to_string())
        .ok_or("no events grouped under today")?;

    assert_eq!(day.len(), 2);
    assert!(day.iter().any(|event| event.symbol == "AAPL"));
    assert_eq!(dto.earnings.len(), 2);
    assert_eq!(dto.previous_week, "-1");
    assert_eq!(dto.current_week, "0");
    assert_eq!(dto.next_week, "1");

    Ok(())
}

/// Expect a past week with enough stored events to be served without a
/// provider round trip
#[tokio::test]
async fn serves_dense_past_week_from_storage() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = app_setup().await?;

    let refresh = app
        .test
        .server
        .mock("GET", "/v1/finance/earnings")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let last_week = Utc::now().date_naive() - Duration::days(7);
    for index in 0..TEST_REFRESH_THRESHOLD {
        let stock = record::factory::insert_stock(&app.test.db, &format!("STK{index}")).await?;
        record::factory::insert_earnings_event(&app.test.db, stock.id, last_week).await?;
    }

    let dto = calendar(State(app.state), Query(params(-1))).await?.0;

    let day = dto
        .earnings_by_date
        .get(&last_week.to_string())
        .ok_or("no events grouped under last week")?;

    assert_eq!(day.len(), TEST_REFRESH_THRESHOLD);
    refresh.assert_async().await;

    Ok(())
}

/// Expect a sparse past week to fall back to a provider refresh
#[tokio::test]
async fn refreshes_sparse_past_week() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = app_setup().await?;

    let last_week = Utc::now().date_naive() - Duration::days(7);
    let payload = market::factory::earnings_payload(vec![market::factory::earnings_item(
        "AAPL",
        "Apple Inc.",
        &last_week.to_string(),
    )]);
    let refresh = market::mockito::mock_earnings_endpoint(&mut app.test.server, payload).await;

    let dto = calendar(State(app.state), Query(params(-1))).await?.0;

    assert!(dto.earnings_by_date.contains_key(&last_week.to_string()));
    refresh.assert_async().await;

    Ok(())
}

/// Expect a symbol filter to narrow the calendar to one ticker
#[tokio::test]
async fn filters_by_symbol() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = app_setup().await?;

    let today = Utc::now().date_naive();
    let payload = market::factory::earnings_payload(vec![
        market::factory::earnings_item("AAPL", "Apple Inc.", &today.to_string()),
        market::factory::earnings_item("MSFT", "Microsoft", &today.to_string()),
    ]);
    market::mockito::mock_earnings_endpoint(&mut app.test.server, payload).await;

    let dto = calendar(
        State(app.state),
        Query(CalendarParams {
            week: 0,
            symbol: Some("aapl".to_string()),
        }),
    )
    .await?
    .0;

    assert_eq!(dto.earnings.len(), 1);
    assert_eq!(dto.earnings[0].symbol, "AAPL");

    Ok(())
}
