use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::model::auth::AuthContext;

/// The provider URL to send the browser to, plus the state nonce embedded in
/// it.
pub fn login_service(auth: &AuthContext) -> (Url, CsrfToken) {
    auth.oauth
        .authorize_url(CsrfToken::new_random)
        .add_scope(Scope::new("email".to_string()))
        .add_scope(Scope::new("profile".to_string()))
        .url()
}
