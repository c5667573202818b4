//! Reusable request dependencies.
//!
//! Each type here is an extractor that handlers declare as a parameter; axum
//! resolves it per request, so several routes can share the same parsing and
//! defaults. Dependencies may build on each other, as [`QueryOrCookie`] does
//! with [`QueryString`].

mod common;
mod query_or_cookie;

pub use common::{CommonParams, Pagination};
pub use query_or_cookie::{LAST_QUERY_COOKIE, QueryOrCookie, QueryString};
