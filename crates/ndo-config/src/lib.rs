//! # ndo-config
//!
//! Layered configuration loading for ndomig using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`NDOMIG_*` prefix, `__` as separator)
//! 2. Project-level `./ndomig.toml`
//! 3. User-level `~/.config/ndomig/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `NDOMIG_CONTROLLER__HOST` -> `controller.host`,
//! `NDOMIG_MIGRATE__GRACE_SECS` -> `migrate.grace_secs`, etc. The `__`
//! (double underscore) separates nested config sections, which keeps
//! credentials out of the command line and the workbook.
//!
//! # Usage
//!
//! ```no_run
//! use ndo_config::NdoConfig;
//!
//! let config = NdoConfig::load_with_dotenv().expect("config");
//! config.controller.require_complete().expect("credentials");
//! ```

mod controller;
mod error;
mod log;
mod migrate;

pub use controller::ControllerConfig;
pub use error::ConfigError;
pub use log::LogConfig;
pub use migrate::MigrateConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NdoConfig {
    #[serde(default)]
    pub controller: ControllerConfig,
    #[serde(default)]
    pub migrate: MigrateConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl NdoConfig {
    /// Load configuration from all sources (TOML files + environment).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if `.env`
    /// file loading is wanted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// This is the typical entry point for the CLI and tests.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from("ndomig.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("NDOMIG_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ndomig").join("config.toml"))
    }
}
