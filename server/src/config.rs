//! Configuration management for the server.

use std::env;

/// Default request body limit (2 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Delimiter used to join and split paths
    pub delimiter: String,
    /// Maximum accepted request body size in bytes
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            delimiter: nestkit_core::DEFAULT_DELIMITER.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort)?,
            None => defaults.port,
        };

        let delimiter = lookup("NESTKIT_DELIMITER").unwrap_or(defaults.delimiter);
        if delimiter.is_empty() {
            return Err(ConfigError::EmptyDelimiter);
        }

        let max_body_bytes = match lookup("MAX_BODY_BYTES") {
            Some(value) => value
                .parse()
                .ok()
                .filter(|limit| *limit > 0)
                .ok_or(ConfigError::InvalidBodyLimit)?,
            None => defaults.max_body_bytes,
        };

        Ok(Self {
            host,
            port,
            delimiter,
            max_body_bytes,
        })
    }

    /// Address to bind the listener to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value")]
    InvalidPort,

    #[error("NESTKIT_DELIMITER must not be empty")]
    EmptyDelimiter,

    #[error("Invalid MAX_BODY_BYTES value")]
    InvalidBodyLimit,
}
