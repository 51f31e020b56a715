use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
};
use watchdeck::controller::auth::verify;
use watchdeck_test_utils::prelude::*;

use crate::setup::app_setup;

fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&format!("Bearer {token}")) {
        headers.insert(header::AUTHORIZATION, value);
    }

    headers
}

/// Expect a valid verdict with the user's profile attached
#[tokio::test]
async fn reports_valid_token_with_user() -> Result<(), Box<dyn std::error::Error>> {
    let app = app_setup().await?;

    let user = record::factory::insert_user(&app.test.db, "ada@example.com").await?;
    let token = app.state.auth.jwt.issue(user.id, &user.email)?;

    let verdict = verify(State(app.state), bearer_headers(&token)).await?.0;

    assert!(verdict.is_valid);
    assert_eq!(verdict.user.map(|user| user.email).as_deref(), Some("ada@example.com"));

    Ok(())
}

/// Expect an invalid verdict rather than an error when no token is sent
#[tokio::test]
async fn reports_missing_token_as_invalid() -> Result<(), Box<dyn std::error::Error>> {
    let app = app_setup().await?;

    let verdict = verify(State(app.state), HeaderMap::new()).await?.0;

    assert!(!verdict.is_valid);
    assert!(verdict.user.is_none());

    Ok(())
}

/// Expect an invalid verdict for a token signed with the wrong secret
#[tokio::test]
async fn reports_forged_token_as_invalid() -> Result<(), Box<dyn std::error::Error>> {
    let app = app_setup().await?;

    let forged = watchdeck::model::auth::JwtKeys::new("wrong-secret", 24).issue(1, "x@example.com")?;

    let verdict = verify(State(app.state), bearer_headers(&forged)).await?.0;

    assert!(!verdict.is_valid);

    Ok(())
}
