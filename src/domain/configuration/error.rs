use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::DriverInfo;

/// Failure to read or parse a configuration document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Why a required field could not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldProblem {
    Absent,
    WrongType { found: &'static str },
}

/// Errors produced while resolving an environment's database configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The environment file is missing, unreadable, or not valid TOML.
    #[error("Failed to load {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },

    /// A required field is absent or not a string.
    #[error("{}", missing_field_message(.path, .field, .problem))]
    MissingField { path: PathBuf, field: &'static str, problem: FieldProblem },

    /// The driver does not resolve to a usable import and dialect.
    #[error("Invalid driver configuration: {driver}")]
    InvalidDriver { driver: Box<DriverInfo> },
}

fn missing_field_message(path: &Path, field: &str, problem: &FieldProblem) -> String {
    match problem {
        FieldProblem::Absent => {
            format!("Missing required field '{}' in {}", field, path.display())
        }
        FieldProblem::WrongType { found } => format!(
            "Field '{}' in {} must be a string, found {}",
            field,
            path.display(),
            found
        ),
    }
}
