//! Cookie parsing, and cookies set by extractors.
//!
//! An extractor has no access to the response, so it queues `Set-Cookie`
//! values in task-local storage instead. [`add_pending_cookies`] scopes that
//! storage around the handler and appends whatever was queued.

use std::cell::RefCell;

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue, header},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

tokio::task_local! {
    /// Set-Cookie values queued by extractors for the current request.
    static PENDING_COOKIES: RefCell<Vec<String>>;
}

/// Extract a cookie value from the Cookie header.
pub fn get_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    let cookie_header = headers.get(header::COOKIE)?.to_str().ok()?;
    for part in cookie_header.split(';') {
        let part = part.trim();
        if let Some((key, value)) = part.split_once('=') {
            if key.trim() == name {
                return Some(value.trim());
            }
        }
    }
    None
}

/// Extract a cookie written by [`queue_cookie`], undoing its percent-encoding.
///
/// A value that does not decode to UTF-8 is returned as sent.
pub fn get_encoded_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = get_cookie(headers, name)?;
    match urlencoding::decode(raw) {
        Ok(value) => Some(value.into_owned()),
        Err(e) => {
            debug!(cookie = %name, error = %e, "Cookie is not percent-encoded UTF-8");
            Some(raw.to_string())
        }
    }
}

/// Queue a session cookie to be set on the current response.
///
/// The value is percent-encoded, so any string can be stored; read it back
/// with [`get_encoded_cookie`]. Returns false if the request is not running
/// under [`add_pending_cookies`].
pub fn queue_cookie(name: &str, value: &str) -> bool {
    let cookie = format!(
        "{}={}; Path=/; SameSite=Lax",
        name,
        urlencoding::encode(value)
    );
    PENDING_COOKIES
        .try_with(|cell| cell.borrow_mut().push(cookie))
        .is_ok()
}

/// Middleware that appends cookies queued during the request to the response.
pub async fn add_pending_cookies(request: Request, next: Next) -> Response {
    PENDING_COOKIES
        .scope(RefCell::new(Vec::new()), async move {
            let mut response = next.run(request).await;

            let cookies = PENDING_COOKIES.with(|cell| std::mem::take(&mut *cell.borrow_mut()));
            let headers = response.headers_mut();
            for cookie in cookies {
                match HeaderValue::from_str(&cookie) {
                    Ok(value) => {
                        headers.append(header::SET_COOKIE, value);
                    }
                    Err(e) => warn!(error = %e, "Dropping invalid Set-Cookie value"),
                }
            }

            response
        })
        .await
}
