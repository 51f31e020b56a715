use axum::{
    extract::FromRequestParts,
    http::{header, Request, StatusCode},
    response::IntoResponse,
};
use watchdeck::{controller::auth::profile, model::auth::AuthUser};
use watchdeck_test_utils::prelude::*;

use crate::setup::app_setup;

fn request_parts(token: Option<&str>) -> axum::http::request::Parts {
    let builder = Request::builder().uri("/api/auth/profile");

    let builder = match token {
        Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {token}")),
        None => builder,
    };

    let (parts, ()) = builder.body(()).unwrap().into_parts();

    parts
}

/// Expect the logged in user's own profile
#[tokio::test]
async fn returns_profile_for_authenticated_user() -> Result<(), Box<dyn std::error::Error>> {
    let app = app_setup().await?;

    let user = record::factory::insert_user(&app.test.db, "ada@example.com").await?;

    let dto = profile(AuthUser(user)).await.0;

    assert_eq!(dto.email, "ada@example.com");
    assert_eq!(dto.first_name, "Test");
    assert!(dto.is_email_verified);

    Ok(())
}

/// Expect the extractor to resolve a valid bearer token to its user
#[tokio::test]
async fn extractor_resolves_token_to_user() -> Result<(), Box<dyn std::error::Error>> {
    let app = app_setup().await?;

    let user = record::factory::insert_user(&app.test.db, "ada@example.com").await?;
    let token = app.state.auth.jwt.issue(user.id, &user.email)?;

    let mut parts = request_parts(Some(&token));
    let result = AuthUser::from_request_parts(&mut parts, &app.state).await;

    assert!(result.is_ok());
    let AuthUser(resolved) = result.ok().unwrap();
    assert_eq!(resolved.id, user.id);

    Ok(())
}

/// Expect 401 when the request carries no bearer token
#[tokio::test]
async fn extractor_rejects_missing_token() -> Result<(), Box<dyn std::error::Error>> {
    let app = app_setup().await?;

    let mut parts = request_parts(None);
    let result = AuthUser::from_request_parts(&mut parts, &app.state).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 404 when the token names a user that no longer exists
#[tokio::test]
async fn extractor_rejects_deleted_user() -> Result<(), Box<dyn std::error::Error>> {
    let app = app_setup().await?;

    let token = app.state.auth.jwt.issue(999, "gone@example.com")?;

    let mut parts = request_parts(Some(&token));
    let result = AuthUser::from_request_parts(&mut parts, &app.state).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
