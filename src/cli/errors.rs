//! CLI error types.

use std::io;

use thiserror::Error;

use crate::api::ConfigError;

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

/// Errors terminating a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be assembled from the environment.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The async runtime could not be created.
    #[error("runtime error: {0}")]
    Runtime(String),

    /// The server failed to bind or serve.
    #[error("server error: {0}")]
    Server(#[from] io::Error),
}
