use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use watchdeck::controller::auth::google;
use watchdeck_test_utils::constant::TEST_GOOGLE_CLIENT_ID;

use crate::setup::app_setup;

/// Expect a temporary redirect pointing at the provider's consent screen
#[tokio::test]
async fn redirects_to_consent_screen() -> Result<(), Box<dyn std::error::Error>> {
    let app = app_setup().await?;
    let server_url = app.test.server.url();

    let resp = google(State(app.state)).await.into_response();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    assert!(location.starts_with(&format!("{server_url}/auth")));
    assert!(location.contains(&format!("client_id={TEST_GOOGLE_CLIENT_ID}")));
    assert!(location.contains("scope=email+profile"));

    Ok(())
}
