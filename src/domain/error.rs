use std::io;

use thiserror::Error;

use crate::domain::ConfigError;

/// Library-wide error type for dbconf operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The environment's database configuration could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Rendering output as JSON failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
