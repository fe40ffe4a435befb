//! Session-authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use promptgate_core::error::CoreError;
use promptgate_core::types::DbId;

use crate::auth::cookie::{extract_cookie_value, SESSION_COOKIE};
use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from the `token` cookie, falling back to
/// a Bearer token in the `Authorization` header when the cookie is absent.
///
/// Use this as an extractor parameter in any handler that requires a
/// session:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::debug!(user_id = user.user_id, username = %user.username, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// Extraction never extends the token's life; there is no sliding expiry.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    /// The user's username (from `claims.username`).
    pub username: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_cookie_value(&parts.headers, SESSION_COOKIE)
            .or_else(|| bearer_token(parts))
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("No token provided".into()))
            })?;

        // Invalid and expired collapse into one unauthorized outcome.
        let claims = validate_token(&token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            username: claims.username,
        })
    }
}

/// Read a Bearer token from the `Authorization` header, if present.
fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}
