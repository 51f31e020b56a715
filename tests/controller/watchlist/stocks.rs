use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use watchdeck::{
    controller::watchlist::{add_stock, get_one, get_stocks, remove_stock},
    model::{auth::AuthUser, watchlist::AddStockDto},
};
use watchdeck_test_utils::prelude::*;

use crate::setup::app_setup;

fn add_dto(symbol: &str) -> AddStockDto {
    AddStockDto {
        symbol: symbol.to_string(),
    }
}

/// Expect adding a symbol twice to report the duplicate instead of failing
#[tokio::test]
async fn add_stock_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = app_setup().await?;

    let payload =
        market::factory::quote_payload(vec![market::factory::quote("AAPL", "Apple Inc.")]);
    market::mockito::mock_quote_endpoint(&mut app.test.server, "AAPL", payload).await;

    let user = record::factory::insert_user(&app.test.db, "ada@example.com").await?;
    let watchlist = record::factory::insert_watchlist(&app.test.db, user.id, "Tech").await?;

    let first = add_stock(
        State(app.state.clone()),
        AuthUser(user.clone()),
        Path(watchlist.id),
        Json(add_dto("AAPL")),
    )
    .await?
    .0;
    assert_eq!(first.message, "Stock added to watchlist");

    let second = add_stock(
        State(app.state.clone()),
        AuthUser(user.clone()),
        Path(watchlist.id),
        Json(add_dto("AAPL")),
    )
    .await?
    .0;
    assert_eq!(second.message, "Stock already in watchlist");

    let fetched = get_one(State(app.state), AuthUser(user), Path(watchlist.id))
        .await?
        .0;
    assert_eq!(fetched.stocks.len(), 1);
    assert_eq!(fetched.stocks[0].symbol, "AAPL");

    Ok(())
}

/// Expect the stocks route to list the watchlist's members
#[tokio::test]
async fn lists_watchlist_stocks() -> Result<(), Box<dyn std::error::Error>> {
    let app = app_setup().await?;

    let user = record::factory::insert_user(&app.test.db, "ada@example.com").await?;
    let watchlist = record::factory::insert_watchlist(&app.test.db, user.id, "Tech").await?;
    let stock = record::factory::insert_stock(&app.test.db, "AAPL").await?;
    record::factory::insert_watchlist_stock(&app.test.db, watchlist.id, stock.id).await?;

    let stocks = get_stocks(State(app.state), AuthUser(user), Path(watchlist.id))
        .await?
        .0;

    assert_eq!(stocks.len(), 1);
    assert_eq!(stocks[0].symbol, "AAPL");

    Ok(())
}

/// Expect 404 when listing stocks on another user's watchlist
#[tokio::test]
async fn hides_other_users_stocks() -> Result<(), Box<dyn std::error::Error>> {
    let app = app_setup().await?;

    let owner = record::factory::insert_user(&app.test.db, "ada@example.com").await?;
    let other = record::factory::insert_user(&app.test.db, "grace@example.com").await?;
    let watchlist = record::factory::insert_watchlist(&app.test.db, owner.id, "Tech").await?;

    let result = get_stocks(State(app.state), AuthUser(other), Path(watchlist.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect a removed stock to disappear from the watchlist
#[tokio::test]
async fn remove_stock_clears_membership() -> Result<(), Box<dyn std::error::Error>> {
    let app = app_setup().await?;

    let user = record::factory::insert_user(&app.test.db, "ada@example.com").await?;
    let watchlist = record::factory::insert_watchlist(&app.test.db, user.id, "Tech").await?;
    let stock = record::factory::insert_stock(&app.test.db, "AAPL").await?;
    record::factory::insert_watchlist_stock(&app.test.db, watchlist.id, stock.id).await?;

    let message = remove_stock(
        State(app.state.clone()),
        AuthUser(user.clone()),
        Path((watchlist.id, "AAPL".to_string())),
    )
    .await?
    .0;
    assert_eq!(message.message, "Stock removed from watchlist");

    let fetched = get_one(State(app.state), AuthUser(user), Path(watchlist.id))
        .await?
        .0;
    assert!(fetched.stocks.is_empty());

    Ok(())
}

/// Expect 404 when removing a symbol that is not on the watchlist
#[tokio::test]
async fn remove_stock_rejects_absent_symbol() -> Result<(), Box<dyn std::error::Error>> {
    let app = app_setup().await?;

    let user = record::factory::insert_user(&app.test.db, "ada@example.com").await?;
    let watchlist = record::factory::insert_watchlist(&app.test.db, user.id, "Tech").await?;

    let result = remove_stock(
        State(app.state),
        AuthUser(user),
        Path((watchlist.id, "AAPL".to_string())),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
