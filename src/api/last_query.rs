//! Query-or-cookie fallback demonstration.
//!
//! - GET `/item` - Echo `q`, remembering it in a cookie for later requests

use axum::{Json, Router, middleware, routing::get};
use serde::Serialize;

use crate::cookie::add_pending_cookies;
use crate::deps::QueryOrCookie;

pub fn router() -> Router {
    Router::new()
        .route("/item", get(read_stuff))
        .layer(middleware::from_fn(add_pending_cookies))
}

#[derive(Serialize)]
struct StuffResponse {
    stuff: Option<String>,
}

async fn read_stuff(QueryOrCookie(stuff): QueryOrCookie) -> Json<StuffResponse> {
    Json(StuffResponse { stuff })
}
