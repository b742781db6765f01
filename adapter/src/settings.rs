//! Settings file management

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::AdapterError;
use crate::logs::{LogLevel, LogOptions};

/// Environment variable naming an optional JSON settings file
pub const SETTINGS_ENV_VAR: &str = "REDIS_ADAPTER_SETTINGS";

/// Adapter settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Emit logs as JSON lines
    #[serde(default)]
    pub json_logs: bool,

    /// Platform bindings are expected to come from
    #[serde(default = "default_platform")]
    pub expected_platform: String,
}

fn default_platform() -> String {
    "cloudfoundry".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            json_logs: false,
            expected_platform: default_platform(),
        }
    }
}

impl Settings {
    /// Read settings from a JSON file
    pub fn read(path: impl AsRef<Path>) -> Result<Self, AdapterError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let settings = serde_json::from_str(&contents)?;
        Ok(settings)
    }

    /// Load settings from the file named by [`SETTINGS_ENV_VAR`], or defaults when unset
    pub fn load() -> Result<Self, AdapterError> {
        match std::env::var(SETTINGS_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::read(path.trim()),
            _ => Ok(Self::default()),
        }
    }

    pub fn log_options(&self) -> LogOptions {
        LogOptions {
            log_level: self.log_level.clone(),
            json_format: self.json_logs,
        }
    }
}
