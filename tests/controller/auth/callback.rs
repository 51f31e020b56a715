use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use serde_json::json;
use watchdeck::controller::auth::{google_callback, CallbackParams};
use watchdeck_test_utils::constant::TEST_FRONTEND_URL;

use crate::setup::{app_setup, AppTest};

async fn mock_token_endpoint(app: &mut AppTest) -> mockito::Mock {
    app.test
        .server
        .mock("POST", "/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "access_token": "provider-access-token",
                "token_type": "bearer",
                "expires_in": 3600
            })
            .to_string(),
        )
        .create_async()
        .await
}

async fn mock_userinfo_endpoint(app: &mut AppTest) -> mockito::Mock {
    app.test
        .server
        .mock("GET", "/userinfo")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "google-ada",
                "email": "ada@example.com",
                "given_name": "Ada",
                "family_name": "Lovelace",
                "picture": "https://example.com/ada.png"
            })
            .to_string(),
        )
        .create_async()
        .await
}

fn params(code: &str) -> CallbackParams {
    CallbackParams {
        code: code.to_string(),
        state: Some("state".to_string()),
    }
}

/// Expect a redirect to the frontend success page carrying a token once the
/// code exchange and profile fetch succeed
#[tokio::test]
async fn redirects_to_frontend_with_token() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = app_setup().await?;

    let token_endpoint = mock_token_endpoint(&mut app).await;
    let userinfo_endpoint = mock_userinfo_endpoint(&mut app).await;

    let resp = google_callback(State(app.state), Query(params("auth-code")))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    assert!(location.starts_with(&format!("{TEST_FRONTEND_URL}/auth/success?token=")));

    token_endpoint.assert_async().await;
    userinfo_endpoint.assert_async().await;

    Ok(())
}

/// Expect a redirect to the frontend error page when the provider rejects
/// the authorization code
#[tokio::test]
async fn redirects_to_error_page_on_rejected_code() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = app_setup().await?;

    app.test
        .server
        .mock("POST", "/token")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(json!({ "error": "invalid_grant" }).to_string())
        .create_async()
        .await;

    let resp = google_callback(State(app.state), Query(params("bad-code")))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    assert_eq!(location, format!("{TEST_FRONTEND_URL}/auth/error"));

    Ok(())
}
