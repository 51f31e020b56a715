use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use watchdeck::{controller::stock::get_stock, model::auth::AuthUser};
use watchdeck_test_utils::prelude::*;

use crate::setup::app_setup;

/// Expect a cached symbol answered from storage without a provider call
#[tokio::test]
async fn serves_cached_symbol() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = app_setup().await?;

    let provider = app
        .test
        .server
        .mock("GET", "/v7/finance/quote")
        .expect(0)
        .create_async()
        .await;

    let user = record::factory::insert_user(&app.test.db, "ada@example.com").await?;
    let stored = record::factory::insert_stock(&app.test.db, "AAPL").await?;

    let dto = get_stock(State(app.state), AuthUser(user), Path("aapl".to_string()))
        .await?
        .0;

    provider.assert_async().await;
    assert_eq!(dto.id, stored.id);
    assert_eq!(dto.symbol, "AAPL");

    Ok(())
}

/// Expect a cache miss to reconcile the provider's quote and return it
#[tokio::test]
async fn returns_reconciled_details() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = app_setup().await?;

    let payload =
        market::factory::quote_payload(vec![market::factory::quote("AAPL", "Apple Inc.")]);
    market::mockito::mock_quote_endpoint(&mut app.test.server, "AAPL", payload).await;

    let user = record::factory::insert_user(&app.test.db, "ada@example.com").await?;

    let dto = get_stock(State(app.state), AuthUser(user), Path("AAPL".to_string()))
        .await?
        .0;

    assert_eq!(dto.symbol, "AAPL");
    assert_eq!(dto.name.as_deref(), Some("Apple Inc."));
    assert_eq!(dto.exchange.as_deref(), Some("NasdaqGS"));
    assert_eq!(dto.sector.as_deref(), Some("Technology"));

    Ok(())
}

/// Expect 404 when the provider has no quote for the symbol
#[tokio::test]
async fn rejects_unknown_symbol() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = app_setup().await?;

    let payload = market::factory::quote_payload(vec![]);
    market::mockito::mock_quote_endpoint(&mut app.test.server, "NOPE", payload).await;

    let user = record::factory::insert_user(&app.test.db, "ada@example.com").await?;

    let result = get_stock(State(app.state), AuthUser(user), Path("NOPE".to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
