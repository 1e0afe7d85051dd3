//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A required configuration field is empty.
    #[error("Missing configuration value for '{field}' (set NDOMIG_{env} or add it to ndomig.toml)")]
    Missing { field: &'static str, env: &'static str },
}
