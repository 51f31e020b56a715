use axum::extract::{Query, State};
use watchdeck::{
    controller::stock::{search, SearchParams},
    model::auth::AuthUser,
};
use watchdeck_test_utils::prelude::*;

use crate::setup::app_setup;

fn params(query: &str) -> SearchParams {
    SearchParams {
        query: query.to_string(),
    }
}

/// Expect stored rows to answer a search without a provider call
#[tokio::test]
async fn serves_stored_rows_first() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = app_setup().await?;

    let provider = app
        .test
        .server
        .mock("GET", "/v1/finance/search")
        .expect(0)
        .create_async()
        .await;

    let user = record::factory::insert_user(&app.test.db, "ada@example.com").await?;
    let stored = record::factory::insert_stock(&app.test.db, "AAPL").await?;

    let results = search(State(app.state), AuthUser(user), Query(params("aapl")))
        .await?
        .0;

    provider.assert_async().await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, stored.id);

    Ok(())
}

/// Expect provider matches reconciled into storage when nothing is stored
#[tokio::test]
async fn falls_back_to_provider_matches() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = app_setup().await?;

    let payload = market::factory::search_payload(vec![
        market::factory::search_quote("AAPL", "Apple Inc."),
        market::factory::search_quote("AAPD", "Direxion AAPL Bear"),
    ]);
    market::mockito::mock_search_endpoint(&mut app.test.server, "aapl", payload).await;

    let user = record::factory::insert_user(&app.test.db, "ada@example.com").await?;

    let results = search(State(app.state), AuthUser(user), Query(params("aapl")))
        .await?
        .0;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].symbol, "AAPL");
    assert_eq!(results[0].name.as_deref(), Some("Apple Inc."));

    Ok(())
}

/// Expect an empty result list instead of an error when the provider is down
#[tokio::test]
async fn degrades_to_empty_when_provider_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = app_setup().await?;

    market::mockito::mock_failing_endpoint(&mut app.test.server, "/v1/finance/search").await;

    let user = record::factory::insert_user(&app.test.db, "ada@example.com").await?;

    let results = search(State(app.state), AuthUser(user), Query(params("aapl")))
        .await?
        .0;

    assert!(results.is_empty());

    Ok(())
}
