//! Handlers for the `/auth` resource (register, login, logout, me).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use promptgate_core::error::CoreError;
use promptgate_db::models::user::{CreateUser, User, UserResponse};
use promptgate_db::repositories::UserRepo;
use serde::Deserialize;
use serde_json::json;

use crate::auth::cookie::{clear_session_cookie, session_cookie};
use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "emailOrUsername")]
    pub email_or_username: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/register
///
/// Create a user account. Fails with 400 when the email or username is
/// already taken. The response never includes the password hash.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    if input.email.trim().is_empty()
        || input.username.trim().is_empty()
        || input.full_name.trim().is_empty()
        || input.password.is_empty()
    {
        return Err(AppError::Core(CoreError::Validation(
            "email, username, fullName and password are required".into(),
        )));
    }

    // Pre-check for a friendly message; the unique constraints remain the
    // backstop for a concurrent duplicate (classified to 400 as well).
    if UserRepo::exists_with_email_or_username(&state.pool, &input.email, &input.username).await? {
        return Err(AppError::Core(CoreError::Duplicate(
            "Email or Username already exists".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: input.email,
            username: input.username,
            full_name: input.full_name,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "User registered",
            "user": UserResponse::from(&user),
        })),
    ))
}

/// POST /api/auth/login
///
/// Authenticate with email-or-username + password. On success, issues a
/// 7-day session token and sets it as the HttpOnly `token` cookie.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_email_or_username(&state.pool, &input.email_or_username)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    let token = generate_token(user.id, &user.username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, username = %user.username, "Login successful");

    Ok(login_response(&user, &token, state.config.jwt.token_expiry_days))
}

/// POST /api/auth/logout
///
/// Clears the session cookie. The token itself is not revoked server-side
/// and would still verify if replayed until it expires; this matches the
/// stateless token design and is a documented limitation.
pub async fn logout() -> impl IntoResponse {
    (
        [(SET_COOKIE, clear_session_cookie())],
        Json(json!({ "message": "Logged out successfully" })),
    )
}

/// GET /api/auth/me
///
/// Return the authenticated user's public fields.
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| {
            // Token subject no longer exists; treat as an invalid session.
            AppError::Core(CoreError::Unauthorized("Unauthorized".into()))
        })?;

    Ok(Json(UserResponse::from(&user)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build the login success response: session cookie + user body.
fn login_response(user: &User, token: &str, expiry_days: i64) -> impl IntoResponse {
    (
        [(SET_COOKIE, session_cookie(token, expiry_days))],
        Json(json!({
            "message": "Login successful",
            "user": UserResponse::from(user),
        })),
    )
}
