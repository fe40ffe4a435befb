//! The `token` session cookie: build, clear, and extract.
//!
//! The cookie is HttpOnly and SameSite=Lax with a Max-Age matching the
//! token TTL. Logout clears it client-side only; the token itself stays
//! verifiable until expiry (no server-side revocation).

use axum::http::HeaderMap;
use axum::http::header::COOKIE;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "token";

/// Build the `Set-Cookie` value carrying a freshly issued session token.
pub fn session_cookie(token: &str, expiry_days: i64) -> String {
    let max_age = expiry_days * 24 * 60 * 60;
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}")
}

/// Build the `Set-Cookie` value that clears the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Extract a named cookie value from the request's `Cookie` header.
pub fn extract_cookie_value(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let raw = headers.get(COOKIE)?.to_str().ok()?;
    for part in raw.split(';') {
        let mut pieces = part.trim().splitn(2, '=');
        let key = pieces.next()?.trim();
        let value = pieces.next()?.trim();

        if key == cookie_name && !value.is_empty() {
            return Some(value.to_string());
        }
    }

    None
}
