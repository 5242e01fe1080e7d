//! dbconf: resolve the database driver, dialect, and connection string
//! configured for a migration environment.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use app::AppContext;

pub use domain::driver::{known_drivers, lookup};
pub use domain::{
    AppError, ConfigError, Dialect, DocumentError, DriverInfo, FieldProblem, KnownDriver,
    ResolvedConfig,
};

/// Resolve the database configuration for `env` under `project_root`.
///
/// Reads `<project_root>/config/<env>.toml`, expands environment variables in
/// `db.dsn` from the process environment, and validates the driver.
pub fn resolve(
    project_root: impl AsRef<Path>,
    env: &str,
) -> Result<ResolvedConfig, ConfigError> {
    let ctx = AppContext::system();
    app::config::resolve_config(&ctx, project_root.as_ref(), env)
}
