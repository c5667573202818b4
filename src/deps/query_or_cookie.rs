use axum::{extract::FromRequestParts, http::request::Parts};
use serde::Deserialize;
use tracing::warn;

use crate::api::{ApiError, AppQuery};
use crate::cookie::{get_encoded_cookie, queue_cookie};

/// Cookie remembering the last non-empty `q` a client sent.
pub const LAST_QUERY_COOKIE: &str = "last_q";

#[derive(Deserialize)]
struct Q {
    q: Option<String>,
}

/// The optional `q` query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryString(pub Option<String>);

impl<S> FromRequestParts<S> for QueryString
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AppQuery(Q { q }) = AppQuery::<Q>::from_request_parts(parts, state).await?;
        Ok(Self(q))
    }
}

/// The `q` query parameter, falling back to the `last_q` cookie.
///
/// A non-empty `q` is remembered by setting `last_q` on the response, which
/// requires the route to run under [`crate::cookie::add_pending_cookies`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOrCookie(pub Option<String>);

impl<S> FromRequestParts<S> for QueryOrCookie
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let QueryString(q) = QueryString::from_request_parts(parts, state).await?;

        match q.filter(|q| !q.is_empty()) {
            Some(q) => {
                if !queue_cookie(LAST_QUERY_COOKIE, &q) {
                    warn!(
                        cookie = LAST_QUERY_COOKIE,
                        "Route does not flush pending cookies; query will not be remembered"
                    );
                }
                Ok(Self(Some(q)))
            }
            None => Ok(Self(get_encoded_cookie(&parts.headers, LAST_QUERY_COOKIE))),
        }
    }
}
