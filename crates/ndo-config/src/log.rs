//! Log output settings.

use serde::{Deserialize, Serialize};

fn default_dir() -> String {
    ".logs".to_owned()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// Directory for per-run log files; created if absent.
    #[serde(default = "default_dir")]
    pub dir: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_dir_is_dot_logs() {
        assert_eq!(LogConfig::default().dir, ".logs");
    }
}
