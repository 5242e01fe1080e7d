mod document_filesystem;
mod postgres_url;
mod process_environment;

pub use document_filesystem::FilesystemDocumentSource;
pub use postgres_url::PostgresUrlNormalizer;
pub use process_environment::ProcessEnvironment;
