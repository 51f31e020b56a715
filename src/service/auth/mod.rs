pub mod callback;
pub mod login;
pub mod verify;

use std::time::Duration;

use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};

use crate::{
    config::Config,
    error::{auth::AuthError, config::ConfigError, Error},
    model::auth::{AuthContext, JwtKeys},
};

/// Wires the OAuth2 client, JWT keys, and HTTP client up from configuration.
pub fn build_auth_context(config: &Config) -> Result<AuthContext, Error> {
    let auth_url = AuthUrl::new(config.google_auth_url.clone())
        .map_err(|_| invalid_url("GOOGLE_AUTH_URL"))?;
    let token_url = TokenUrl::new(config.google_token_url.clone())
        .map_err(|_| invalid_url("GOOGLE_TOKEN_URL"))?;
    let redirect_url = RedirectUrl::new(config.google_callback_url.clone())
        .map_err(|_| invalid_url("GOOGLE_CALLBACK_URL"))?;

    let oauth = BasicClient::new(ClientId::new(config.google_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.google_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    // The token-exchange client must never follow provider redirects
    let http = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(10))
        .build()
        .map_err(AuthError::ClientBuild)?;

    Ok(AuthContext {
        oauth,
        jwt: JwtKeys::new(&config.jwt_secret, config.jwt_expiry_hours),
        userinfo_url: config.google_userinfo_url.clone(),
        frontend_url: config.frontend_url.clone(),
        http,
    })
}

fn invalid_url(var: &str) -> Error {
    ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: "not a valid URL".to_string(),
    }
    .into()
}
