use std::fs;
use std::path::Path;

use crate::domain::{ConfigDocument, DocumentError};
use crate::ports::DocumentSource;

/// Reads TOML documents from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemDocumentSource;

impl DocumentSource for FilesystemDocumentSource {
    fn load(&self, path: &Path) -> Result<ConfigDocument, DocumentError> {
        let content = fs::read_to_string(path)?;
        ConfigDocument::parse(path, &content)
    }
}
