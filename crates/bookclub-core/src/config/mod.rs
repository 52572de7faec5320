pub mod logging_config;
pub mod report_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, ConfigResult};

pub use logging_config::{LogFormat, LoggingConfig};
pub use report_config::{ReportConfig, ReportOptions};

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BookclubConfig {
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

impl BookclubConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file on disk.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    /// Reject values that parse but cannot be honored.
    pub fn validate(&self) -> ConfigResult<()> {
        self.logging.validate()
    }
}
