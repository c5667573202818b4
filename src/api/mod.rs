//! HTTP routers for the three demo applications.

mod error;
mod extract;
mod last_query;
mod params;
mod token;

use axum::Router;
use std::sync::Arc;

use crate::db::Database;
use crate::jwt::JwtConfig;

pub use error::{ApiError, validate_length};
pub use extract::{AppForm, AppJson, AppPath, AppQuery};
pub use params::{DerivedModel, ModelName};

/// Router for the parameter binding demo.
pub fn params_router(db: Database) -> Router {
    params::router(params::ParamsState { db })
}

/// Router for the query-or-cookie demo.
pub fn last_query_router() -> Router {
    last_query::router()
}

/// Router for the login demo.
pub fn token_router(db: Database, jwt: Arc<JwtConfig>) -> Router {
    token::router(token::TokenState { db, jwt })
}
