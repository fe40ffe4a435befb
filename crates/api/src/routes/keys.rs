//! Route definitions for the `/key` registry.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::keys;
use crate::state::AppState;

/// Routes mounted at `/key` (all require a session).
///
/// ```text
/// POST   /create       -> create_key
/// GET    /getmyapis    -> list_my_keys
/// DELETE /delete/{id}  -> delete_key
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(keys::create_key))
        .route("/getmyapis", get(keys::list_my_keys))
        .route("/delete/{id}", delete(keys::delete_key))
}
