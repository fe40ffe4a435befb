//! Repository for the `api_keys` table.

use promptgate_core::types::DbId;
use sqlx::PgPool;

use crate::models::api_key::{ApiKey, CreateApiKey};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, name, key, connection_uri, count, created_at";

/// Provides owner-scoped CRUD and usage accounting for API key records.
pub struct ApiKeyRepo;

impl ApiKeyRepo {
    /// Insert a new API key record with a zero usage count.
    ///
    /// Fails with a unique-constraint violation (`uq_api_keys_key`) if the
    /// secret collides with an existing row; callers re-roll on that.
    pub async fn create(pool: &PgPool, input: &CreateApiKey) -> Result<ApiKey, sqlx::Error> {
        let query = format!(
            "INSERT INTO api_keys (username, name, key, connection_uri)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ApiKey>(&query)
            .bind(&input.username)
            .bind(&input.name)
            .bind(&input.key)
            .bind(&input.connection_uri)
            .fetch_one(pool)
            .await
    }

    /// List all records owned by the given username, newest first.
    pub async fn list_for_owner(
        pool: &PgPool,
        username: &str,
    ) -> Result<Vec<ApiKey>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM api_keys WHERE username = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, ApiKey>(&query)
            .bind(username)
            .fetch_all(pool)
            .await
    }

    /// Find a record by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ApiKey>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM api_keys WHERE id = $1");
        sqlx::query_as::<_, ApiKey>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a record by its secret value.
    pub async fn find_by_key(pool: &PgPool, key: &str) -> Result<Option<ApiKey>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM api_keys WHERE key = $1");
        sqlx::query_as::<_, ApiKey>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// Whether a record with the given secret already exists.
    pub async fn key_exists(pool: &PgPool, key: &str) -> Result<bool, sqlx::Error> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM api_keys WHERE key = $1)")
                .bind(key)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// Permanently delete a record. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM api_keys WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Atomically increment the usage count of the record matching the
    /// given secret by exactly 1.
    ///
    /// A no-op when no record matches; the gateway validates the secret
    /// before calling this, so an unmatched secret is not an error here.
    pub async fn increment_usage(pool: &PgPool, key: &str) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE api_keys SET count = count + 1 WHERE key = $1")
            .bind(key)
            .execute(pool)
            .await?;
        Ok(())
    }
}
