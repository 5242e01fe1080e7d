use crate::ports::{DocumentSource, DsnNormalizer, Environment};
use crate::services::{FilesystemDocumentSource, PostgresUrlNormalizer, ProcessEnvironment};

/// Application context holding the collaborators used during resolution.
pub struct AppContext<D: DocumentSource, E: Environment, N: DsnNormalizer> {
    documents: D,
    environment: E,
    normalizer: N,
}

impl<D: DocumentSource, E: Environment, N: DsnNormalizer> AppContext<D, E, N> {
    /// Create a new application context.
    pub fn new(documents: D, environment: E, normalizer: N) -> Self {
        Self { documents, environment, normalizer }
    }

    /// Get a reference to the document source.
    pub fn documents(&self) -> &D {
        &self.documents
    }

    /// Get a reference to the environment.
    pub fn environment(&self) -> &E {
        &self.environment
    }

    /// Get a reference to the Postgres connection string normalizer.
    pub fn normalizer(&self) -> &N {
        &self.normalizer
    }
}

impl AppContext<FilesystemDocumentSource, ProcessEnvironment, PostgresUrlNormalizer> {
    /// Context backed by the local filesystem and process environment.
    pub fn system() -> Self {
        Self::new(FilesystemDocumentSource, ProcessEnvironment, PostgresUrlNormalizer)
    }
}
