//! Bearer token extraction from the `Authorization` header.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use super::errors::{ApiAuthError, AuthErrorKind};

/// Extract a Bearer token from an Authorization header value.
///
/// The scheme ends at the first space and everything after it is the token,
/// spaces included. An empty token is rejected.
pub fn bearer_token_from_header(header_value: &str) -> Option<&str> {
    let (scheme, token) = header_value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}

/// The raw bearer token presented by the caller. Not validated.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiAuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token_from_header)
            .map(|token| BearerToken(token.to_string()))
            .ok_or(ApiAuthError::new(AuthErrorKind::NotAuthenticated))
    }
}
