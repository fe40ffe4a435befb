//! Shared helpers for HTTP-level integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use promptgate_api::auth::jwt::JwtConfig;
use promptgate_api::config::{InterpreterConfig, ServerConfig};
use promptgate_api::router::build_app_router;
use promptgate_api::state::{build_http_client, AppState};

/// Build a test `ServerConfig` with safe defaults.
///
/// The interpreter URL points at TCP port 9 on loopback so gateway calls
/// fail fast with a connection error instead of reaching a live service.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-0123456789".to_string(),
            token_expiry_days: 7,
        },
        interpreter: InterpreterConfig {
            url: "http://127.0.0.1:9/".to_string(),
            timeout_secs: 2,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, test_config())
}

/// Like [`build_test_app`], but with an explicit config. Used by tests
/// that point the interpreter at a local stub instead of the unreachable
/// default.
pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        http: build_http_client(&config.interpreter),
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a session cookie.
pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a bearer token in the Authorization header.
pub async fn get_with_bearer(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body and a session cookie.
pub async fn post_json_with_cookie(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    cookie: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(COOKIE, cookie)
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request with a session cookie.
pub async fn delete_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Pull the `token=...` pair out of a response's `Set-Cookie` header, in a
/// form ready to send back in a `Cookie` request header.
pub fn session_cookie_from(response: &Response<Body>) -> String {
    let raw = response
        .headers()
        .get(SET_COOKIE)
        .expect("response should set a cookie")
        .to_str()
        .expect("cookie header should be valid UTF-8");

    raw.split(';')
        .next()
        .expect("cookie should have a name=value pair")
        .trim()
        .to_string()
}

// ---------------------------------------------------------------------------
// Fixture helpers
// ---------------------------------------------------------------------------

/// Register a user through the API and return the plaintext password.
pub async fn register_user(pool: &PgPool, username: &str) -> String {
    let password = "test_password_123!".to_string();
    let app = build_test_app(pool.clone());
    let body = serde_json::json!({
        "email": format!("{username}@test.com"),
        "username": username,
        "fullName": format!("{username} Test"),
        "password": password,
    });
    let response = post_json(app, "/api/auth/register", body).await;
    assert_eq!(
        response.status(),
        axum::http::StatusCode::CREATED,
        "registration fixture should succeed"
    );
    password
}

/// Register and log in a user, returning the `token=...` cookie pair.
pub async fn login_session(pool: &PgPool, username: &str) -> String {
    let password = register_user(pool, username).await;

    let app = build_test_app(pool.clone());
    let body = serde_json::json!({
        "emailOrUsername": username,
        "password": password,
    });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(
        response.status(),
        axum::http::StatusCode::OK,
        "login fixture should succeed"
    );
    session_cookie_from(&response)
}
