//! Password login and bearer-protected endpoints.
//!
//! - POST `/token` - Exchange a username and password for an access token
//! - GET `/users/me` - The authenticated, enabled user
//! - GET `/whatIsMyToken` - Echo the presented bearer token

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use super::error::ApiError;
use super::extract::AppForm;
use crate::auth::{ActiveUser, ApiAuthError, AuthErrorKind, BearerToken};
use crate::db::{Database, User};
use crate::impl_has_auth_backend;
use crate::jwt::JwtConfig;

#[derive(Clone)]
pub struct TokenState {
    pub db: Database,
    pub jwt: Arc<JwtConfig>,
}

impl_has_auth_backend!(TokenState);

pub fn router(state: TokenState) -> Router {
    Router::new()
        .route("/token", post(login))
        .route("/users/me", get(read_user))
        .route("/whatIsMyToken", get(read_token))
        .with_state(state)
}

/// OAuth2 password grant form. Other OAuth2 fields (`scope`, `client_id`,
/// `client_secret`) are accepted and ignored.
#[derive(Deserialize)]
struct LoginForm {
    username: String,
    password: String,
    grant_type: Option<String>,
}

#[derive(Serialize)]
struct TokenResponse {
    access_token: String,
    token_type: &'static str,
}

async fn login(
    State(state): State<TokenState>,
    AppForm(form): AppForm<LoginForm>,
) -> Result<Json<TokenResponse>, ApiError> {
    if form.grant_type.as_deref().is_some_and(|g| g != "password") {
        return Err(ApiError::unprocessable("grant_type must be \"password\""));
    }

    let Some(user) = state.db.users().authenticate(&form.username, &form.password) else {
        warn!(username = %form.username, "Failed login attempt");
        return Err(ApiAuthError::new(AuthErrorKind::BadCredentials).into());
    };

    info!(username = %user.username, disabled = user.disabled, "Authenticated");

    let access = state
        .jwt
        .generate_access_token(&user.username)
        .map_err(|e| ApiError::internal("Failed to generate access token", e))?;

    Ok(Json(TokenResponse {
        access_token: access.token,
        token_type: "bearer",
    }))
}

async fn read_user(ActiveUser(user): ActiveUser) -> Json<User> {
    Json(User::from(&user))
}

#[derive(Serialize)]
struct WhatIsMyTokenResponse {
    token: String,
}

async fn read_token(BearerToken(token): BearerToken) -> Json<WhatIsMyTokenResponse> {
    Json(WhatIsMyTokenResponse { token })
}
