//! Runtime settings.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::domain::AppError;
use crate::domain::history::DEFAULT_HISTORY_DIR;

/// Default clipboard poll interval.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Settings loaded from an optional TOML file and CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Directory that receives saved history files.
    #[serde(default = "default_history_dir")]
    pub history_dir: PathBuf,
    /// Clipboard poll interval in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_history_dir() -> PathBuf {
    PathBuf::from(DEFAULT_HISTORY_DIR)
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

impl Default for Settings {
    fn default() -> Self {
        Self { history_dir: default_history_dir(), poll_interval_ms: default_poll_interval_ms() }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.poll_interval_ms == 0 {
            return Err(AppError::config_error("poll_interval_ms must be greater than zero"));
        }
        if self.history_dir.as_os_str().is_empty() {
            return Err(AppError::config_error("history_dir must not be empty"));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Apply command-line overrides on top of these settings.
    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(history_dir) = overrides.history_dir {
            self.history_dir = history_dir;
        }
        if let Some(poll_interval_ms) = overrides.poll_interval_ms {
            self.poll_interval_ms = poll_interval_ms;
        }
        self
    }
}

/// Values given on the command line; `None` keeps the configured value.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub history_dir: Option<PathBuf>,
    pub poll_interval_ms: Option<u64>,
}
