#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use depdemo::{ServerConfig, cli::AppKind, create_app};
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"test-secret-key-that-is-long-enough";

pub fn create_test_app(app: AppKind) -> Router {
    let config = ServerConfig {
        app,
        jwt_secret: Some(TEST_SECRET.to_vec()),
        token_duration_secs: 30 * 60,
    };
    create_app(&config).expect("Failed to create app")
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: serde_json::Value,
}

impl TestResponse {
    /// All Set-Cookie header values.
    pub fn set_cookies(&self) -> Vec<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect()
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|_| {
            serde_json::Value::String(String::from_utf8_lossy(&body).into_owned())
        })
    };
    TestResponse {
        status,
        headers,
        json,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn get_with_header(app: &Router, uri: &str, name: &str, value: &str) -> TestResponse {
    send(
        app,
        Request::builder()
            .uri(uri)
            .header(name, value)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn get_with_bearer(app: &Router, uri: &str, token: &str) -> TestResponse {
    get_with_header(app, uri, "authorization", &format!("Bearer {}", token)).await
}

pub async fn post_json(app: &Router, uri: &str, body: &str) -> TestResponse {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn post_form(app: &Router, uri: &str, body: &str) -> TestResponse {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

/// Log in and return the access token.
pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let response = post_form(
        app,
        "/token",
        &format!("username={}&password={}", username, password),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK, "login failed: {}", response.json);
    response.json["access_token"]
        .as_str()
        .expect("access_token should be a string")
        .to_string()
}
