use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Session token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// External instruction-interpreter endpoint.
    pub interpreter: InterpreterConfig,
}

/// Configuration for the external interpreter the gateway forwards to.
#[derive(Debug, Clone)]
pub struct InterpreterConfig {
    /// Endpoint URL instructions are POSTed to.
    pub url: String,
    /// Per-request timeout in seconds for interpreter calls.
    pub timeout_secs: u64,
}

/// Default interpreter endpoint, matching the deployed service.
const DEFAULT_INTERPRETER_URL: &str = "https://aibackdevs.vercel.app/aibackend";

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                         |
    /// |----------------------------|---------------------------------|
    /// | `HOST`                     | `0.0.0.0`                       |
    /// | `PORT`                     | `5000`                          |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`         |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                            |
    /// | `INTERPRETER_URL`          | the deployed interpreter        |
    /// | `INTERPRETER_TIMEOUT_SECS` | `30`                            |
    ///
    /// JWT settings are loaded by [`JwtConfig::from_env`], which panics if
    /// `JWT_SECRET` is missing.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let interpreter_url =
            std::env::var("INTERPRETER_URL").unwrap_or_else(|_| DEFAULT_INTERPRETER_URL.into());

        let interpreter_timeout_secs: u64 = std::env::var("INTERPRETER_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("INTERPRETER_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            interpreter: InterpreterConfig {
                url: interpreter_url,
                timeout_secs: interpreter_timeout_secs,
            },
        }
    }
}
