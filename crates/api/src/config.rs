use std::str::FromStr;

use turfdesk_client::DEFAULT_BASE_URL;
use turfdesk_core::auth::{AdminCredentials, DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD};

use crate::auth::jwt::{JwtConfig, DEFAULT_EXPIRY_MINS};

/// Default probability that a simulated notification delivery fails.
pub const DEFAULT_NOTIFICATION_FAILURE_RATE: f64 = 0.1;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
///
/// Every field except the JWT secret has a default suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Time allowed for in-flight requests to drain on shutdown.
    pub shutdown_timeout_secs: u64,
    /// Marketplace API base URL.
    pub upstream_base_url: String,
    /// Initial bearer token for the marketplace API.
    pub upstream_auth_token: Option<String>,
    /// The single console admin login.
    pub admin: AdminCredentials,
    /// Session token configuration.
    pub jwt: JwtConfig,
    /// Seed the working sets with the bundled demo dataset on startup.
    pub seed_mock_data: bool,
    /// Probability in `[0, 1]` that a simulated notification fails.
    pub notification_failure_rate: f64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default                            |
    /// |-----------------------------|------------------------------------|
    /// | `HOST`                      | `0.0.0.0`                          |
    /// | `PORT`                      | `3000`                             |
    /// | `CORS_ORIGINS`              | `http://localhost:5173`            |
    /// | `REQUEST_TIMEOUT_SECS`      | `30`                               |
    /// | `SHUTDOWN_TIMEOUT_SECS`     | `30`                               |
    /// | `UPSTREAM_BASE_URL`         | `https://spoortx.onrender.com/api` |
    /// | `UPSTREAM_AUTH_TOKEN`       | unset                              |
    /// | `ADMIN_EMAIL`               | `admin@turfbooking.com`            |
    /// | `ADMIN_PASSWORD`            | `admin123`                         |
    /// | `JWT_SECRET`                | required                           |
    /// | `JWT_EXPIRY_MINS`           | `480`                              |
    /// | `SEED_MOCK_DATA`            | `true`                             |
    /// | `NOTIFICATION_FAILURE_RATE` | `0.1`                              |
    pub fn from_env() -> Result<Self, ConfigError> {
        let cors_origins = var_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let notification_failure_rate: f64 =
            parse_var("NOTIFICATION_FAILURE_RATE", DEFAULT_NOTIFICATION_FAILURE_RATE)?;
        if !(0.0..=1.0).contains(&notification_failure_rate) {
            return Err(ConfigError::Invalid {
                name: "NOTIFICATION_FAILURE_RATE",
                value: notification_failure_rate.to_string(),
            });
        }

        Ok(Self {
            host: var_or("HOST", "0.0.0.0"),
            port: parse_var("PORT", 3000)?,
            cors_origins,
            request_timeout_secs: parse_var("REQUEST_TIMEOUT_SECS", 30)?,
            shutdown_timeout_secs: parse_var("SHUTDOWN_TIMEOUT_SECS", 30)?,
            upstream_base_url: var_or("UPSTREAM_BASE_URL", DEFAULT_BASE_URL),
            upstream_auth_token: std::env::var("UPSTREAM_AUTH_TOKEN")
                .ok()
                .filter(|t| !t.is_empty()),
            admin: AdminCredentials {
                email: var_or("ADMIN_EMAIL", DEFAULT_ADMIN_EMAIL),
                password: var_or("ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD),
            },
            jwt: JwtConfig {
                secret,
                expiry_mins: parse_var("JWT_EXPIRY_MINS", DEFAULT_EXPIRY_MINS)?,
            },
            seed_mock_data: parse_var("SEED_MOCK_DATA", true)?,
            notification_failure_rate,
        })
    }
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            value: raw,
        }),
        Err(_) => Ok(default),
    }
}
