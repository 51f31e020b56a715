use axum::{extract::FromRequestParts, http::request::Parts};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use oauth2::{basic::BasicClient, EndpointNotSet, EndpointSet};
use serde::{Deserialize, Serialize};

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::app::AppState,
};

/// OAuth2 client with the authorization and token endpoints configured.
pub type OAuthClient =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Everything the authentication flow needs outside the database: the OAuth2
/// client, JWT signing keys, the userinfo endpoint, and where to redirect the
/// browser once the callback completes.
pub struct AuthContext {
    pub oauth: OAuthClient,
    pub jwt: JwtKeys,
    pub userinfo_url: String,
    pub frontend_url: String,
    pub http: reqwest::Client,
}

/// JWT claims issued after a successful login.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID the token was issued for.
    pub sub: i32,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 signing and verification keys derived from the configured secret.
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expiry_hours: i64,
}

impl JwtKeys {
    pub fn new(secret: &str, expiry_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            expiry_hours,
        }
    }

    pub fn issue(&self, user_id: i32, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.expiry_hours)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;

        Ok(data.claims)
    }
}

/// Profile returned by the identity provider's userinfo endpoint.
#[derive(Debug, Deserialize)]
pub struct OAuthProfile {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

/// Extractor that resolves the bearer token on a request to the user it was
/// issued for. Handlers taking `AuthUser` reject unauthenticated requests
/// before the handler body runs.
pub struct AuthUser(pub entity::user::Model);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Error> {
        let token = bearer_token(parts).ok_or(AuthError::MissingBearerToken)?;

        let claims = state
            .auth
            .jwt
            .verify(&token)
            .map_err(AuthError::InvalidToken)?;

        let user_repository = UserRepository::new(&state.db);
        let user = user_repository
            .get_by_id(claims.sub)
            .await?
            .ok_or(AuthError::UserNotInDatabase(claims.sub))?;

        Ok(AuthUser(user))
    }
}

fn bearer_token(parts: &Parts) -> Option<String> {
    let header = parts.headers.get(axum::http::header::AUTHORIZATION)?;
    let value = header.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;

    Some(token.to_string())
}
