//! API key record model and DTOs.

use promptgate_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `api_keys` table.
///
/// The `key` field holds the plaintext secret. Records are only ever
/// returned to their owning user (creation response and owner listing),
/// so the secret is serialized.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ApiKey {
    pub id: DbId,
    /// Owning username. Read/delete access is scoped to this owner.
    pub username: String,
    pub name: String,
    pub key: String,
    #[serde(rename = "connectionUri")]
    pub connection_uri: String,
    /// Completed proxied calls made with this key.
    pub count: i64,
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
}

/// DTO for inserting a new API key record.
#[derive(Debug)]
pub struct CreateApiKey {
    pub username: String,
    pub name: String,
    pub key: String,
    pub connection_uri: String,
}
