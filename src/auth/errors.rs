//! Authentication error types.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::WWW_AUTHENTICATE},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Why a request failed authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    /// No bearer token in the request
    NotAuthenticated,
    /// Token is malformed, expired, badly signed, or names an unknown user
    InvalidToken,
    /// Username/password pair did not match at login
    BadCredentials,
    /// Token is valid but the account is disabled
    InactiveUser,
}

/// Authentication error rendered as `{"detail": ...}`.
#[derive(Debug)]
pub struct ApiAuthError {
    kind: AuthErrorKind,
}

impl ApiAuthError {
    pub fn new(kind: AuthErrorKind) -> Self {
        Self { kind }
    }

    fn status_code(&self) -> StatusCode {
        match self.kind {
            AuthErrorKind::NotAuthenticated | AuthErrorKind::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            AuthErrorKind::BadCredentials | AuthErrorKind::InactiveUser => StatusCode::BAD_REQUEST,
        }
    }

    fn message(&self) -> &'static str {
        match self.kind {
            AuthErrorKind::NotAuthenticated => "Not authenticated",
            AuthErrorKind::InvalidToken => "Could not validate credentials",
            AuthErrorKind::BadCredentials => "Incorrect username or password",
            AuthErrorKind::InactiveUser => "Inactive user",
        }
    }

    /// Whether the response should challenge the client for a bearer token.
    fn challenges(&self) -> bool {
        !matches!(self.kind, AuthErrorKind::InactiveUser)
    }
}

impl From<AuthErrorKind> for ApiAuthError {
    fn from(kind: AuthErrorKind) -> Self {
        Self::new(kind)
    }
}

impl IntoResponse for ApiAuthError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            detail: &'static str,
        }

        let mut response = (
            self.status_code(),
            Json(ErrorResponse {
                detail: self.message(),
            }),
        )
            .into_response();

        if self.challenges() {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}
