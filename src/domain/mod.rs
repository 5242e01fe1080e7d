pub mod configuration;
pub mod dialect;
pub mod driver;
pub mod error;

pub use configuration::{
    ConfigDocument, ConfigError, DocumentError, FieldProblem, ResolvedConfig, expand_vars,
};
pub use dialect::Dialect;
pub use driver::{DriverInfo, KnownDriver, POSTGRES_DRIVER};
pub use error::AppError;
