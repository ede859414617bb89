/**
 * Server Configuration
 *
 * This module handles loading of server configuration from environment
 * variables. All configuration is collected once at process start into
 * immutable structs; nothing here is a mutable global. The token service
 * receives its secret and TTL by reference through [`AuthConfig`].
 *
 * # Configuration Sources
 *
 * - `DATABASE_URL` - PostgreSQL connection string (required)
 * - `SECRET_KEY` - JWT signing secret (defaults to a development value)
 * - `ACCESS_TOKEN_EXPIRE_MINUTES` - token TTL (default 30)
 * - `SERVER_PORT` - listen port (default 8000)
 */

use thiserror::Error;

/// Default token lifetime in minutes
const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;

/// Default listen port
const DEFAULT_SERVER_PORT: u16 = 8000;

/// Development-only fallback signing secret
const DEV_SECRET_KEY: &str = "supersecretkeyneedschange";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `DATABASE_URL` was not set. The service cannot run without its store.
    #[error("DATABASE_URL must be set")]
    MissingDatabaseUrl,
}

/// Token signing configuration
///
/// Immutable after construction. The signing algorithm (HS256) and secret
/// are fixed at process start and are not rotatable at runtime.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Symmetric signing secret for access tokens
    pub secret: String,
    /// Lifetime of issued access tokens
    pub token_ttl: chrono::Duration,
}

impl AuthConfig {
    /// Create a token configuration with a TTL in minutes
    pub fn new(secret: impl Into<String>, ttl_minutes: i64) -> Self {
        Self {
            secret: secret.into(),
            token_ttl: chrono::Duration::minutes(ttl_minutes),
        }
    }

    /// Load token configuration from the environment
    ///
    /// Falls back to a development secret (with a warning) and a 30-minute
    /// TTL when the variables are unset.
    pub fn from_env() -> Self {
        let secret = match std::env::var("SECRET_KEY") {
            Ok(secret) => secret,
            Err(_) => {
                tracing::warn!("SECRET_KEY not set, using development default");
                DEV_SECRET_KEY.to_string()
            }
        };
        let ttl_minutes = ttl_minutes_from(std::env::var("ACCESS_TOKEN_EXPIRE_MINUTES").ok());
        Self::new(secret, ttl_minutes)
    }
}

/// Application configuration
///
/// Built once in `main` and threaded into [`create_app`](crate::create_app).
///
/// # Example
///
/// ```rust,no_run
/// use tasktrack::server::config::AppConfig;
///
/// let config = AppConfig::from_env().expect("DATABASE_URL must be set");
/// assert!(config.server_port > 0);
/// ```
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Port the HTTP server binds to
    pub server_port: u16,
    /// Token signing configuration
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load the full application configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDatabaseUrl`] if `DATABASE_URL` is
    /// unset. Unlike optional services, the database is mandatory: the
    /// API is useless without its store, so startup fails fast.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;
        let server_port = port_from(std::env::var("SERVER_PORT").ok());

        Ok(Self {
            database_url,
            server_port,
            auth: AuthConfig::from_env(),
        })
    }
}

/// Parse a TTL override, falling back to the default on absence or garbage
fn ttl_minutes_from(raw: Option<String>) -> i64 {
    raw.and_then(|v| v.parse::<i64>().ok())
        .filter(|minutes| *minutes > 0)
        .unwrap_or(DEFAULT_TOKEN_TTL_MINUTES)
}

/// Parse a port override, falling back to the default on absence or garbage
fn port_from(raw: Option<String>) -> u16 {
    raw.and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(DEFAULT_SERVER_PORT)
}
