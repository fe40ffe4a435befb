use std::sync::Arc;
use std::time::Duration;

use crate::config::{InterpreterConfig, ServerConfig};

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: promptgate_db::DbPool,
    /// Server configuration, loaded once at startup.
    pub config: Arc<ServerConfig>,
    /// Shared HTTP client for interpreter calls.
    pub http: reqwest::Client,
}

/// Build the HTTP client used for interpreter calls.
///
/// The per-request timeout comes from configuration so a hung interpreter
/// cannot pin gateway requests indefinitely.
pub fn build_http_client(config: &InterpreterConfig) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .expect("Failed to build reqwest HTTP client")
}
