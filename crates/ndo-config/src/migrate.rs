//! Migration pacing settings.

use serde::{Deserialize, Serialize};

const fn default_grace_secs() -> u64 {
    2
}

const fn default_poll_interval_ms() -> u64 {
    500
}

const fn default_poll_attempts() -> u32 {
    240
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MigrateConfig {
    /// Pause between stripping source-side static ports and deploying the
    /// destination template, giving leaf switches time to reconfigure.
    #[serde(default = "default_grace_secs")]
    pub grace_secs: u64,

    /// Interval between deployment status polls.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Poll attempts before a deployment is treated as wedged and the row
    /// fails.
    #[serde(default = "default_poll_attempts")]
    pub poll_attempts: u32,
}

impl Default for MigrateConfig {
    fn default() -> Self {
        Self {
            grace_secs: default_grace_secs(),
            poll_interval_ms: default_poll_interval_ms(),
            poll_attempts: default_poll_attempts(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_controller_pacing() {
        let config = MigrateConfig::default();
        assert_eq!(config.grace_secs, 2);
        assert_eq!(config.poll_interval_ms, 500);
        assert_eq!(config.poll_attempts, 240);
    }
}
