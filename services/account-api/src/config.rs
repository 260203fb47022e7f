//! Configuration for the Account API service.

use std::time::Duration;

use fitgen_account_core::AccountConfig;

/// Development-only signing secret
///
/// Kept so the service starts out of the box; any real deployment must set
/// `JWT_SECRET`. A warning is logged when this default is in use.
pub const INSECURE_DEFAULT_SECRET: &str = "dev-secret-change-me";

/// Account API configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub port: u16,

    /// Database URL
    pub database_url: String,

    /// Account core configuration
    pub account: AccountConfig,

    /// Whether the insecure default secret is in use
    pub using_default_secret: bool,

    /// Request timeout
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://fitgen.db".to_string());

        let (token_secret, using_default_secret) = match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => (secret, false),
            _ => (INSECURE_DEFAULT_SECRET.to_string(), true),
        };

        let token_ttl_secs: u64 = std::env::var("TOKEN_TTL_SECS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("TOKEN_TTL_SECS"))?;

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("REQUEST_TIMEOUT_SECS"))?;

        let account =
            AccountConfig::new(token_secret).with_token_ttl(Duration::from_secs(token_ttl_secs));

        Ok(Self {
            port,
            database_url,
            account,
            using_default_secret,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
