use std::path::Path;

use crate::domain::{AppError, ResolvedConfig};

pub(super) fn run_show(root: &Path, env: &str, json: bool) -> Result<(), AppError> {
    let config = crate::resolve(root, env)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print!("{}", render(&config));
    }
    Ok(())
}

pub(super) fn run_check(root: &Path, env: &str) -> Result<(), AppError> {
    let config = crate::resolve(root, env)?;
    println!("✅ {}: {}", config.env, config.driver);
    Ok(())
}

fn render(config: &ResolvedConfig) -> String {
    let driver = &config.driver;
    let dialect = driver.dialect.map(|d| d.name()).unwrap_or_default();
    let migrations = config.migrations_dir.display().to_string();

    [
        ("environment", config.env.as_str()),
        ("migrations", migrations.as_str()),
        ("driver", driver.name.as_str()),
        ("dialect", dialect),
        ("import", driver.import.as_str()),
        ("dsn", driver.dsn.as_str()),
    ]
    .iter()
    .map(|(label, value)| format!("{:<13}{}\n", format!("{label}:"), value))
    .collect()
}
