//! The proxy gateway: forwards composed instructions to the external
//! interpreter and accounts usage.
//!
//! Per invocation: validate -> resolve key -> compose -> forward ->
//! account. Stateless; every call is a single attempt with no retry.
//!
//! Compatibility quirk, preserved deliberately: missing required fields
//! and invalid keys are reported as HTTP 200 with a JSON *string* body
//! (`"Required Field Missing: ..."` / `"Invalid Key"`). Deployed clients
//! key on those bodies, so the shape cannot change.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use promptgate_core::error::CoreError;
use promptgate_core::instruction::compose_instruction;
use promptgate_db::repositories::ApiKeyRepo;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /v1`.
///
/// All fields are optional at the deserialization layer so that missing
/// required fields produce the quirk response rather than a 422.
#[derive(Debug, Deserialize)]
pub struct InvokeRequest {
    pub instructions: Option<String>,
    pub key: Option<String>,
    #[serde(rename = "collectionName")]
    pub collection_name: Option<String>,
    pub data: Option<Value>,
    #[serde(rename = "oldData")]
    pub old_data: Option<Value>,
}

/// POST /api/v1
///
/// Key-authenticated (no session). Composes the instruction text, forwards
/// it with the key's stored connection string to the interpreter, relays
/// the interpreter's JSON verbatim, and increments the key's usage count
/// only after the upstream call has observably succeeded.
pub async fn invoke(
    State(state): State<AppState>,
    Json(input): Json<InvokeRequest>,
) -> AppResult<Response> {
    let (instructions, key, collection_name) = match required_fields(&input) {
        Some(fields) => fields,
        None => {
            return Ok(Json(
                "Required Field Missing: instructions, key, collectionName",
            )
            .into_response());
        }
    };

    let record = ApiKeyRepo::find_by_key(&state.pool, key).await?;
    let record = match record.filter(|r| !r.connection_uri.is_empty()) {
        Some(record) => record,
        None => return Ok(Json("Invalid Key").into_response()),
    };

    let composed = compose_instruction(
        instructions,
        input.data.as_ref(),
        input.old_data.as_ref(),
    );

    // Wire contract with the interpreter; field names are fixed.
    let payload = json!({
        "instructions": composed,
        "Schemaname": collection_name,
        "uri": record.connection_uri,
    });

    tracing::debug!(
        api_key_id = record.id,
        collection = %collection_name,
        "Forwarding instruction to interpreter"
    );

    let body = forward(&state, &payload).await?;

    // Count reflects completed round-trips only: increment strictly after
    // upstream success. A crash in between under-reports, never
    // over-reports.
    ApiKeyRepo::increment_usage(&state.pool, &record.key).await?;

    Ok(Json(body).into_response())
}

/// Pull out the three required fields, treating blank strings as missing.
fn required_fields(input: &InvokeRequest) -> Option<(&str, &str, &str)> {
    let instructions = input.instructions.as_deref().filter(|s| !s.trim().is_empty())?;
    let key = input.key.as_deref().filter(|s| !s.trim().is_empty())?;
    let collection = input
        .collection_name
        .as_deref()
        .filter(|s| !s.trim().is_empty())?;
    Some((instructions, key, collection))
}

/// Single-attempt POST to the interpreter; any network failure, non-2xx
/// status, or undecodable body is an upstream error.
async fn forward(state: &AppState, payload: &Value) -> AppResult<Value> {
    let response = state
        .http
        .post(&state.config.interpreter.url)
        .json(payload)
        .send()
        .await
        .map_err(|e| AppError::Core(CoreError::Upstream(format!("request failed: {e}"))))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Core(CoreError::Upstream(format!(
            "interpreter returned HTTP {status}"
        ))));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| AppError::Core(CoreError::Upstream(format!("invalid response body: {e}"))))
}
