use axum::{extract::FromRequestParts, http::request::Parts};
use serde::{Deserialize, Serialize};

use crate::api::{ApiError, AppQuery};

/// Treat an empty string the same as an absent parameter.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[derive(Deserialize)]
struct CommonQuery {
    q: Option<String>,
    #[serde(default)]
    id: i64,
    #[serde(default)]
    tax: i64,
}

/// Query parameters shared by several routes: `q`, `id` (default 0) and
/// `tax` (default 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommonParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    pub id: i64,
    pub tax: i64,
}

impl<S> FromRequestParts<S> for CommonParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AppQuery(query) = AppQuery::<CommonQuery>::from_request_parts(parts, state).await?;
        Ok(Self {
            q: non_empty(query.q),
            id: query.id,
            tax: query.tax,
        })
    }
}

const fn default_limit() -> i64 {
    10
}

#[derive(Deserialize)]
struct PaginationQuery {
    q: Option<String>,
    #[serde(default)]
    skip: i64,
    #[serde(default = "default_limit")]
    limit: i64,
}

/// Search-and-window parameters: `q`, `skip` (default 0) and `limit`
/// (default 10). Either may be negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub q: Option<String>,
    pub skip: i64,
    pub limit: i64,
}

impl Pagination {
    /// The `skip..skip + limit` window of `items`.
    ///
    /// A negative bound counts back from the end of `items`, so `skip = -1`
    /// selects the last item and `limit = -1` drops it. Bounds are clamped,
    /// and a window whose end falls before its start is empty.
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let len = i64::try_from(items.len()).unwrap_or(i64::MAX);
        let resolve = |bound: i64| {
            let bound = if bound < 0 { len + bound } else { bound };
            bound.clamp(0, len) as usize
        };

        let start = resolve(self.skip);
        let end = resolve(self.skip.saturating_add(self.limit));
        if start >= end {
            return &[];
        }
        &items[start..end]
    }
}

impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AppQuery(query) =
            AppQuery::<PaginationQuery>::from_request_parts(parts, state).await?;
        Ok(Self {
            q: non_empty(query.q),
            skip: query.skip,
            limit: query.limit,
        })
    }
}
