pub mod document;
pub mod error;
pub mod expand;
pub mod paths;
pub mod resolved;

pub use document::ConfigDocument;
pub use error::{ConfigError, DocumentError, FieldProblem};
pub use expand::expand_vars;
pub use resolved::ResolvedConfig;
