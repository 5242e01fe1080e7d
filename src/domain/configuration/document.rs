//! Queryable view over a parsed environment document.

use std::path::{Path, PathBuf};

use toml::{Table, Value};

use crate::domain::configuration::{ConfigError, DocumentError, FieldProblem};

/// A parsed TOML document, queried by dotted key paths such as `db.driver`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    path: PathBuf,
    root: Table,
}

impl ConfigDocument {
    pub fn new(path: impl Into<PathBuf>, root: Table) -> Self {
        Self { path: path.into(), root }
    }

    /// Parse TOML text read from `path`.
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self, DocumentError> {
        let root: Table = content.parse()?;
        Ok(Self::new(path, root))
    }

    /// File this document was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a value by dotted key path.
    pub fn get(&self, key_path: &str) -> Option<&Value> {
        let mut segments = key_path.split('.');
        let first = segments.next()?;
        segments.try_fold(self.root.get(first)?, |value, segment| value.get(segment))
    }

    /// Fetch a required string field.
    pub fn require_str(&self, key_path: &'static str) -> Result<&str, ConfigError> {
        match self.get(key_path) {
            Some(Value::String(value)) => Ok(value),
            Some(other) => Err(self.field_error(
                key_path,
                FieldProblem::WrongType { found: other.type_str() },
            )),
            None => Err(self.field_error(key_path, FieldProblem::Absent)),
        }
    }

    /// Fetch an optional string field. Values of any other type count as absent.
    pub fn optional_str(&self, key_path: &str) -> Option<&str> {
        self.get(key_path).and_then(Value::as_str)
    }

    fn field_error(&self, field: &'static str, problem: FieldProblem) -> ConfigError {
        ConfigError::MissingField { path: self.path.clone(), field, problem }
    }
}
