//! Logging configuration.

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, ConfigResult};

/// Output format for the fmt subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
}

/// Settings for [`crate::tracing::init_tracing`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `"bookclub_analytics=debug"`. Default: `"info"`.
    pub filter: Option<String>,
    pub format: LogFormat,
    /// Include module targets in each line. Default: true.
    pub with_target: Option<bool>,
}

impl LoggingConfig {
    pub fn effective_filter(&self) -> &str {
        self.filter.as_deref().unwrap_or("info")
    }

    pub fn effective_with_target(&self) -> bool {
        self.with_target.unwrap_or(true)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(filter) = &self.filter {
            if filter.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    field: "logging.filter".to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
