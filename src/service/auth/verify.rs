use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::Error,
    model::{auth::AuthContext, user::VerifyDto},
};

/// Checks a bearer token without ever rejecting the request: a missing,
/// invalid, or orphaned token reports `is_valid: false` instead of an error.
pub async fn verify_service(
    db: &DatabaseConnection,
    auth: &AuthContext,
    token: Option<&str>,
) -> Result<VerifyDto, Error> {
    let invalid = VerifyDto {
        is_valid: false,
        user: None,
    };

    let Some(token) = token else {
        return Ok(invalid);
    };

    let claims = match auth.jwt.verify(token) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::debug!("token failed verification: {}", err);

            return Ok(invalid);
        }
    };

    let repository = UserRepository::new(db);
    match repository.get_by_id(claims.sub).await? {
        Some(user) => Ok(VerifyDto {
            is_valid: true,
            user: Some(user.into()),
        }),
        None => Ok(invalid),
    }
}
