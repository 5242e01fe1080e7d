//! Database configuration resolution for one environment.

use std::path::Path;

use tracing::debug;

use crate::app::AppContext;
use crate::domain::configuration::paths;
use crate::domain::{
    ConfigError, Dialect, DriverInfo, POSTGRES_DRIVER, ResolvedConfig, driver, expand_vars,
};
use crate::ports::{DocumentSource, DsnNormalizer, Environment};

/// Load `<project_root>/config/<env>.toml` and resolve its database driver.
///
/// Steps run in order and stop at the first failure:
/// 1. parse the environment document
/// 2. read `db.driver` and `db.dsn` (both required strings)
/// 3. expand `$VAR` references in the DSN
/// 4. rewrite Postgres URLs into keyword/value form when possible
/// 5. look up the driver and apply `migrate.import` / `migrate.dialect`
/// 6. reject drivers without an import or dialect
pub fn resolve_config<D, E, N>(
    ctx: &AppContext<D, E, N>,
    project_root: &Path,
    env: &str,
) -> Result<ResolvedConfig, ConfigError>
where
    D: DocumentSource,
    E: Environment,
    N: DsnNormalizer,
{
    let config_path = paths::config_file(project_root, env);
    debug!(path = %config_path.display(), env, "loading database configuration");

    let document = ctx
        .documents()
        .load(&config_path)
        .map_err(|source| ConfigError::Load { path: config_path.clone(), source })?;

    let driver_name = document.require_str("db.driver")?;
    let raw_dsn = document.require_str("db.dsn")?;
    let mut dsn = expand_vars(raw_dsn, |name| ctx.environment().var(name));

    if driver_name == POSTGRES_DRIVER {
        match ctx.normalizer().normalize(&dsn) {
            Some(normalized) if !normalized.is_empty() => {
                debug!("normalized postgres connection url");
                dsn = normalized;
            }
            _ => debug!("keeping postgres connection string as written"),
        }
    }

    let mut resolved = DriverInfo { dsn, ..driver::lookup(driver_name) };

    if let Some(import) = document.optional_str("migrate.import") {
        debug!(import, "overriding driver import");
        resolved.import = import.to_string();
    }

    if let Some(dialect) = document.optional_str("migrate.dialect") {
        debug!(dialect, "overriding driver dialect");
        resolved.dialect = Dialect::from_name(dialect);
    }

    if !resolved.is_valid() {
        return Err(ConfigError::InvalidDriver { driver: Box::new(resolved) });
    }

    Ok(ResolvedConfig {
        migrations_dir: paths::migrations_dir(project_root),
        env: env.to_string(),
        driver: resolved,
    })
}
