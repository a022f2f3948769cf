/**
 * Server Configuration
 *
 * Configuration is loaded once at startup and passed explicitly to the
 * services that need it, never read ambiently per request. A missing
 * `JWT_SECRET` or `DATABASE_URL` is a fatal startup error.
 */

use thiserror::Error;

/// Configuration loading failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
    #[error("Invalid value for {0}: {1}")]
    InvalidVar(&'static str, String),
}

/// Startup configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Token signing secret
    pub jwt_secret: String,
    /// Listen port (default 3001)
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?;

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidVar("SERVER_PORT", raw))?,
            Err(_) => 3001,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            port,
        })
    }
}
