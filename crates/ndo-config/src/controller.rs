//! Controller connection settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_timeout_secs() -> u64 {
    30
}

fn default_login_domain() -> String {
    "local".to_owned()
}

/// Where the orchestrator lives and how to authenticate against it.
///
/// Credentials are supplied externally (env vars or config file) and are
/// never written into the exported workbook.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ControllerConfig {
    /// Controller hostname or IP (no scheme; the client always uses https).
    #[serde(default)]
    pub host: String,

    /// Login domain.
    #[serde(default = "default_login_domain")]
    pub domain: String,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            domain: default_login_domain(),
            username: String::new(),
            password: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ControllerConfig {
    /// Validate that every field needed to reach the controller is present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming the first empty field.
    pub fn require_complete(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::Missing {
                field: "controller.host",
                env: "CONTROLLER__HOST",
            });
        }
        if self.username.is_empty() {
            return Err(ConfigError::Missing {
                field: "controller.username",
                env: "CONTROLLER__USERNAME",
            });
        }
        if self.password.is_empty() {
            return Err(ConfigError::Missing {
                field: "controller.password",
                env: "CONTROLLER__PASSWORD",
            });
        }
        Ok(())
    }

    /// Base URL for API calls.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("https://{}", self.host)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_are_incomplete() {
        let config = ControllerConfig::default();
        assert_eq!(config.domain, "local");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.require_complete().is_err());
    }

    #[test]
    fn complete_config_passes_validation() {
        let config = ControllerConfig {
            host: "ndo.example.net".into(),
            username: "svc-migrate".into(),
            password: "hunter2".into(),
            ..Default::default()
        };
        assert!(config.require_complete().is_ok());
        assert_eq!(config.base_url(), "https://ndo.example.net");
    }

    #[test]
    fn missing_password_names_the_field() {
        let config = ControllerConfig {
            host: "ndo.example.net".into(),
            username: "svc-migrate".into(),
            ..Default::default()
        };
        let err = config.require_complete().unwrap_err();
        assert!(err.to_string().contains("controller.password"));
    }
}
