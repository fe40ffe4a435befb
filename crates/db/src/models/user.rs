//! User entity model and DTOs.

use promptgate_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- never serialize this to API responses.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub email: String,
    pub username: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            username: user.username.clone(),
            full_name: user.full_name.clone(),
        }
    }
}

/// DTO for inserting a new user. The password is already hashed by the
/// caller.
#[derive(Debug)]
pub struct CreateUser {
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub password_hash: String,
}
