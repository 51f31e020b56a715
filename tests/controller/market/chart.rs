use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use watchdeck::controller::market::{chart, ChartParams};
use watchdeck_test_utils::prelude::*;

use crate::setup::app_setup;

fn params(symbol: &str) -> ChartParams {
    ChartParams {
        symbol: symbol.to_string(),
        interval: Some("1d".to_string()),
        range: Some("1mo".to_string()),
        include_pre_post: None,
        events: None,
    }
}

/// Expect the provider's chart payload passed through untouched
#[tokio::test]
async fn passes_provider_payload_through() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = app_setup().await?;

    let payload = market::factory::chart_payload("AAPL");
    market::mockito::mock_chart_endpoint(&mut app.test.server, "AAPL", payload.clone()).await;

    let body = chart(State(app.state), Query(params("AAPL"))).await?.0;

    assert_eq!(body, payload);

    Ok(())
}

/// Expect 502 when the provider cannot serve the chart
#[tokio::test]
async fn reports_bad_gateway_on_provider_failure() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = app_setup().await?;

    market::mockito::mock_failing_endpoint(&mut app.test.server, "/v8/finance/chart/MSFT").await;

    let result = chart(State(app.state), Query(params("MSFT"))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    Ok(())
}
