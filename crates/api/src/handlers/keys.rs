//! Handlers for the owner-scoped API key registry.
//!
//! The plaintext secret is part of the record and is returned to the
//! owning user on creation and listing; records are never visible to any
//! other user.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use promptgate_core::error::CoreError;
use promptgate_core::keys::{generate_key_secret, MAX_GENERATION_ATTEMPTS};
use promptgate_core::types::DbId;
use promptgate_db::models::api_key::{ApiKey, CreateApiKey};
use promptgate_db::repositories::ApiKeyRepo;
use serde::Deserialize;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /key/create`.
#[derive(Debug, Deserialize)]
pub struct CreateKeyRequest {
    pub name: String,
    #[serde(rename = "connectionUri")]
    pub connection_uri: String,
}

/// POST /api/key/create
///
/// Create an API key record for the authenticated user. The secret is
/// generated server-side and re-rolled on collision; the unique index on
/// the secret column is the real uniqueness guarantee, the pre-check only
/// avoids a wasted insert.
pub async fn create_key(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateKeyRequest>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() || input.connection_uri.trim().is_empty() {
        return Err(AppError::BadRequest("Missing required fields".into()));
    }

    let record = insert_with_fresh_secret(&state, &auth_user.username, &input).await?;

    tracing::info!(
        api_key_id = record.id,
        username = %auth_user.username,
        name = %record.name,
        "API key created",
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "API Key created",
            "apiKey": record,
        })),
    ))
}

/// GET /api/key/getmyapis
///
/// List the caller's own key records. Scoping is by the authenticated
/// username, never by anything the caller supplies.
pub async fn list_my_keys(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Vec<ApiKey>>> {
    let keys = ApiKeyRepo::list_for_owner(&state.pool, &auth_user.username).await?;
    Ok(Json(keys))
}

/// DELETE /api/key/delete/{id}
///
/// Permanently delete one of the caller's key records. Ownership is
/// checked even though the id already identifies the record, so an id
/// guessed by another user yields 403 and leaves the record in place.
pub async fn delete_key(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let record = ApiKeyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("API Key not found".into()))?;

    if record.username != auth_user.username {
        return Err(AppError::Core(CoreError::Forbidden("Unauthorized".into())));
    }

    ApiKeyRepo::delete(&state.pool, id).await?;

    tracing::info!(api_key_id = id, username = %auth_user.username, "API key deleted");

    Ok(Json(json!({ "message": "API Key deleted successfully" })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Generate a secret and insert the record, re-rolling on collisions.
///
/// Bounded at [`MAX_GENERATION_ATTEMPTS`]; exhausting the bound means the
/// store keeps reporting duplicates for fresh random secrets, which is an
/// internal failure rather than bad input.
async fn insert_with_fresh_secret(
    state: &AppState,
    username: &str,
    input: &CreateKeyRequest,
) -> AppResult<ApiKey> {
    for attempt in 1..=MAX_GENERATION_ATTEMPTS {
        let secret = generate_key_secret();

        // Best-effort pre-check; a racing insert still lands on the
        // unique index below.
        if ApiKeyRepo::key_exists(&state.pool, &secret).await? {
            continue;
        }

        let result = ApiKeyRepo::create(
            &state.pool,
            &CreateApiKey {
                username: username.to_string(),
                name: input.name.trim().to_string(),
                key: secret,
                connection_uri: input.connection_uri.trim().to_string(),
            },
        )
        .await;

        match result {
            Ok(record) => return Ok(record),
            Err(err) if promptgate_db::is_unique_violation(&err) => {
                tracing::warn!(attempt, "API key secret collision, re-rolling");
            }
            Err(err) => return Err(err.into()),
        }
    }

    Err(AppError::InternalError(
        "Could not generate a unique API key".into(),
    ))
}
