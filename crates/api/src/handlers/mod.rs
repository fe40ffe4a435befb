//! Request handlers.
//!
//! Each submodule serves one resource: `auth` for registration and
//! sessions, `keys` for the owner-scoped API key registry, and `gateway`
//! for the external-interpreter proxy. Handlers delegate persistence to
//! the repositories in `promptgate_db` and map errors via `AppError`.

pub mod auth;
pub mod gateway;
pub mod keys;
