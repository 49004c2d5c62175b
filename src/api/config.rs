//! HTTP server configuration.

use std::env;

use thiserror::Error;

/// An environment variable that could not be interpreted.
#[derive(Debug, Clone, Error)]
#[error("invalid {var}: {message}")]
pub struct ConfigError {
    pub var: &'static str,
    pub message: String,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    pub host: String,

    /// Port to bind to (default: 8000)
    pub port: u16,

    /// CORS allowed origins; empty means permissive (any origin)
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Reads `HOST`, `PORT` and `CORS_ORIGINS` (comma-separated) from
    /// the environment; unset variables take their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_host);

        let port = match env::var("PORT").ok().filter(|v| !v.is_empty()) {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError {
                var: "PORT",
                message: e.to_string(),
            })?,
            None => default_port(),
        };

        let cors_origins = env::var("CORS_ORIGINS")
            .ok()
            .map(|raw| {
                raw.split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            cors_origins,
        })
    }

    /// Create a config with the specified port.
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
