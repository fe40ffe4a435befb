use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// HTTP handlers map these onto status codes at the boundary: `Validation`
/// and `Duplicate` become 400, `Unauthorized` 401, `Forbidden` 403,
/// `NotFound` 404, `Upstream` and `Internal` 500.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A uniqueness rule was violated (duplicate email, username, ...).
    /// Reported as 400, not 409; clients key on that status.
    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The external interpreter call failed (network error or non-2xx).
    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
