use std::path::{Path, PathBuf};

/// Extension of environment documents.
pub const CONFIG_EXTENSION: &str = "toml";

/// `<root>/config/<env>.toml`
pub fn config_file(root: &Path, env: &str) -> PathBuf {
    root.join("config").join(format!("{env}.{CONFIG_EXTENSION}"))
}

/// `<root>/migrations`
pub fn migrations_dir(root: &Path) -> PathBuf {
    root.join("migrations")
}
