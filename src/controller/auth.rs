use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;

use crate::{
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        auth::AuthUser,
        user::{UserDto, VerifyDto},
    },
    service::auth::{callback::callback_service, login::login_service, verify::verify_service},
};

pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize)]
pub struct CallbackParams {
    pub code: String,
    #[allow(dead_code)]
    pub state: Option<String>,
}

/// Initiate login with Google
///
/// Redirects the browser to Google's consent screen.
#[utoipa::path(
    get,
    path = "/api/auth/google",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the Google consent screen"),
    ),
)]
pub async fn google(State(state): State<AppState>) -> impl IntoResponse {
    let (url, _csrf) = login_service(&state.auth);

    Redirect::temporary(url.as_str())
}

/// Callback route the browser lands on after consenting at Google
///
/// Exchanges the authorization code for a profile, signs the user in, and
/// redirects to the frontend with a bearer token. Failures redirect to the
/// frontend's error page instead of surfacing an API error to the browser.
#[utoipa::path(
    get,
    path = "/api/auth/google/callback",
    tag = AUTH_TAG,
    params(
        ("code" = String, Query, description = "Authorization code issued by Google"),
    ),
    responses(
        (status = 307, description = "Redirect to the frontend with a token, or to its error page"),
    ),
)]
pub async fn google_callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> impl IntoResponse {
    match callback_service(&state.db, &state.auth, params.code).await {
        Ok((token, user)) => {
            tracing::info!(user_id = %user.id, "user logged in");

            Redirect::temporary(&format!(
                "{}/auth/success?token={}",
                state.auth.frontend_url, token
            ))
        }
        Err(err) => {
            tracing::warn!("login callback failed: {}", err);

            Redirect::temporary(&format!("{}/auth/error", state.auth.frontend_url))
        }
    }
}

/// Get the profile of the logged in user
#[utoipa::path(
    get,
    path = "/api/auth/profile",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The logged in user's profile", body = UserDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
    ),
)]
pub async fn profile(AuthUser(user): AuthUser) -> Json<UserDto> {
    Json(UserDto::from(user))
}

/// Check whether a bearer token is still valid
///
/// Always answers 200; the verdict is carried in the body so frontends can
/// poll it without handling auth errors.
#[utoipa::path(
    get,
    path = "/api/auth/verify",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The verification verdict", body = VerifyDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
    ),
)]
pub async fn verify(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<VerifyDto>, Error> {
    let token = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let verdict = verify_service(&state.db, &state.auth, token).await?;

    Ok(Json(verdict))
}
