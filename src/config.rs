//! Environment-derived server configuration.

use std::net::SocketAddr;

use crate::error::config::ConfigError;

/// Server configuration, read once at startup.
pub struct Config {
    /// Connection string for the catalog database.
    pub database_url: String,
    /// Socket address the HTTP server binds to.
    pub listen_addr: SocketAddr,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// `DATABASE_URL` is required; `LISTEN_ADDR` defaults to `0.0.0.0:8080`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let listen_addr =
            std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let listen_addr = listen_addr
            .parse()
            .map_err(|_| ConfigError::InvalidEnvValue {
                var: "LISTEN_ADDR".to_string(),
                reason: format!("'{listen_addr}' is not a valid socket address"),
            })?;

        Ok(Self {
            database_url,
            listen_addr,
        })
    }
}
