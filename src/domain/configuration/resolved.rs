use std::path::PathBuf;

use serde::Serialize;

use crate::domain::DriverInfo;

/// Database configuration resolved for one environment.
///
/// Only constructed once `driver` has passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    pub migrations_dir: PathBuf,
    pub env: String,
    pub driver: DriverInfo,
}
