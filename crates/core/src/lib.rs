//! Domain logic shared across the promptgate crates.
//!
//! Deliberately free of internal dependencies so both the API server and
//! any future CLI tooling can reuse the error taxonomy, key generation,
//! and instruction composition without pulling in axum or sqlx.

pub mod error;
pub mod instruction;
pub mod keys;
pub mod types;
