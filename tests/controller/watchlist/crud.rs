use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use watchdeck::{
    controller::watchlist::{create, delete, get_one, list, update},
    model::{
        auth::AuthUser,
        watchlist::{CreateWatchlistDto, UpdateWatchlistDto},
    },
};
use watchdeck_test_utils::prelude::*;

use crate::setup::app_setup;

/// Expect a created watchlist to come back from the list endpoint
#[tokio::test]
async fn created_watchlist_appears_in_list() -> Result<(), Box<dyn std::error::Error>> {
    let app = app_setup().await?;

    let user = record::factory::insert_user(&app.test.db, "ada@example.com").await?;

    let dto = CreateWatchlistDto {
        name: "Tech".to_string(),
        description: Some("Large caps".to_string()),
    };
    let (status, created) = create(
        State(app.state.clone()),
        AuthUser(user.clone()),
        Json(dto),
    )
    .await?;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created.0.name, "Tech");

    let watchlists = list(State(app.state), AuthUser(user)).await?.0;

    assert_eq!(watchlists.len(), 1);
    assert_eq!(watchlists[0].id, created.0.id);
    assert!(watchlists[0].stocks.is_empty());

    Ok(())
}

/// Expect 400 for a blank watchlist name
#[tokio::test]
async fn rejects_blank_name() -> Result<(), Box<dyn std::error::Error>> {
    let app = app_setup().await?;

    let user = record::factory::insert_user(&app.test.db, "ada@example.com").await?;

    let dto = CreateWatchlistDto {
        name: "   ".to_string(),
        description: None,
    };
    let result = create(State(app.state), AuthUser(user), Json(dto)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect an update to change only the supplied fields
#[tokio::test]
async fn update_keeps_absent_fields() -> Result<(), Box<dyn std::error::Error>> {
    let app = app_setup().await?;

    let user = record::factory::insert_user(&app.test.db, "ada@example.com").await?;
    let watchlist = record::factory::insert_watchlist(&app.test.db, user.id, "Tech").await?;

    let dto = UpdateWatchlistDto {
        name: Some("Mega caps".to_string()),
        description: None,
    };
    let updated = update(
        State(app.state),
        AuthUser(user),
        Path(watchlist.id),
        Json(dto),
    )
    .await?
    .0;

    assert_eq!(updated.name, "Mega caps");
    assert_eq!(updated.description, watchlist.description);

    Ok(())
}

/// Expect 404 when fetching another user's watchlist
#[tokio::test]
async fn hides_other_users_watchlists() -> Result<(), Box<dyn std::error::Error>> {
    let app = app_setup().await?;

    let owner = record::factory::insert_user(&app.test.db, "ada@example.com").await?;
    let other = record::factory::insert_user(&app.test.db, "grace@example.com").await?;
    let watchlist = record::factory::insert_watchlist(&app.test.db, owner.id, "Tech").await?;

    let result = get_one(State(app.state), AuthUser(other), Path(watchlist.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 204 on delete and 404 on a later fetch
#[tokio::test]
async fn delete_removes_watchlist() -> Result<(), Box<dyn std::error::Error>> {
    let app = app_setup().await?;

    let user = record::factory::insert_user(&app.test.db, "ada@example.com").await?;
    let watchlist = record::factory::insert_watchlist(&app.test.db, user.id, "Tech").await?;

    let status = delete(
        State(app.state.clone()),
        AuthUser(user.clone()),
        Path(watchlist.id),
    )
    .await?;

    assert_eq!(status, StatusCode::NO_CONTENT);

    let result = get_one(State(app.state), AuthUser(user), Path(watchlist.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
