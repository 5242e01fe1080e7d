//! In-memory port doubles for unit tests.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{ConfigDocument, DocumentError};
use crate::ports::{DocumentSource, DsnNormalizer, Environment};

/// Document source backed by a map of path to TOML text.
#[derive(Debug, Default)]
pub struct InMemoryDocuments {
    files: HashMap<PathBuf, String>,
}

impl InMemoryDocuments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document at `path`.
    pub fn with(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }
}

impl DocumentSource for InMemoryDocuments {
    fn load(&self, path: &Path) -> Result<ConfigDocument, DocumentError> {
        let content = self.files.get(path).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path.display()))
        })?;
        ConfigDocument::parse(path, content)
    }
}

/// Environment with a fixed set of variables.
#[derive(Debug, Default)]
pub struct FixedEnvironment {
    vars: HashMap<String, String>,
}

impl FixedEnvironment {
    pub fn new(vars: &[(&str, &str)]) -> Self {
        Self { vars: vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect() }
    }
}

impl Environment for FixedEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Normalizer that never rewrites anything.
#[derive(Debug, Default)]
pub struct NoNormalization;

impl DsnNormalizer for NoNormalization {
    fn normalize(&self, _dsn: &str) -> Option<String> {
        None
    }
}

/// Normalizer that returns a fixed string, including an empty one.
#[derive(Debug)]
pub struct FixedNormalization(pub &'static str);

impl DsnNormalizer for FixedNormalization {
    fn normalize(&self, _dsn: &str) -> Option<String> {
        Some(self.0.to_string())
    }
}
