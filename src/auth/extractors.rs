//! Axum extractors for authentication.

use axum::{extract::FromRequestParts, http::request::Parts};
use tracing::debug;

use super::bearer::BearerToken;
use super::errors::{ApiAuthError, AuthErrorKind};
use super::state::HasAuthBackend;
use crate::db::UserInDb;

/// Decode a bearer token and resolve its subject to a stored user.
fn decode_token<S>(token: &str, state: &S) -> Result<UserInDb, AuthErrorKind>
where
    S: HasAuthBackend,
{
    let claims = state.jwt().validate_access_token(token).map_err(|e| {
        debug!(error = %e, "Rejected access token");
        AuthErrorKind::InvalidToken
    })?;

    state.users().get(&claims.sub).cloned().ok_or_else(|| {
        debug!(username = %claims.sub, "Token subject is not a known user");
        AuthErrorKind::InvalidToken
    })
}

/// Extractor for endpoints that require a valid token for a known user.
pub struct CurrentUser(pub UserInDb);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: HasAuthBackend + Send + Sync,
{
    type Rejection = ApiAuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let BearerToken(token) = BearerToken::from_request_parts(parts, state).await?;

        decode_token(&token, state)
            .map(CurrentUser)
            .map_err(ApiAuthError::from)
    }
}

/// Extractor for endpoints that require a valid token for an enabled user.
pub struct ActiveUser(pub UserInDb);

impl<S> FromRequestParts<S> for ActiveUser
where
    S: HasAuthBackend + Send + Sync,
{
    type Rejection = ApiAuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;

        if user.disabled {
            return Err(ApiAuthError::new(AuthErrorKind::InactiveUser));
        }

        Ok(ActiveUser(user))
    }
}
