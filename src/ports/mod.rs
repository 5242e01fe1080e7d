mod document_source;
mod dsn_normalizer;
mod environment;

pub use document_source::DocumentSource;
pub use dsn_normalizer::DsnNormalizer;
pub use environment::Environment;
