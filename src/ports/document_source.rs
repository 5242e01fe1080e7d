//! Loading of environment documents.

use std::path::Path;

use crate::domain::{ConfigDocument, DocumentError};

/// Port for parsing a structured document from a path.
pub trait DocumentSource {
    /// Read and parse the document at `path`.
    fn load(&self, path: &Path) -> Result<ConfigDocument, DocumentError>;
}
