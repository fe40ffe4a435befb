//! Authentication middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from the
//!   session cookie (or a Bearer token fallback).

pub mod auth;
