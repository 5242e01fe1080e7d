//! Environment-backed database configuration resolution.

mod resolve_config;

pub use resolve_config::resolve_config;
