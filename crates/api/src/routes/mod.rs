pub mod auth;
pub mod health;
pub mod keys;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /auth/register        register (public)
/// /auth/login           login (public, sets cookie)
/// /auth/logout          logout (public, clears cookie)
/// /auth/me              current user (session)
///
/// /key/create           create API key (session)
/// /key/getmyapis        list own API keys (session)
/// /key/delete/{id}      delete own API key (session)
///
/// /v1                   proxy gateway (key-authenticated, no session)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/key", keys::router())
        .route("/v1", post(handlers::gateway::invoke))
}
