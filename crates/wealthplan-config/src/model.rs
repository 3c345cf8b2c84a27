use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Duration};

use crate::ConfigError;

/// Directory name appended to the OS data directory.
pub const APP_DIR_NAME: &str = "wealthplan";

/// Stores user-configurable planner preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_currency")]
    pub currency: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for the household document.
    pub data_dir: Option<PathBuf>,

    /// Quiet period after the last edit before the session persists.
    #[serde(default = "Config::default_autosave_delay_ms")]
    pub autosave_delay_ms: u64,

    #[serde(default = "Config::default_pretty_exports")]
    pub pretty_exports: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            currency: Self::default_currency(),
            data_dir: None,
            autosave_delay_ms: Self::default_autosave_delay_ms(),
            pretty_exports: Self::default_pretty_exports(),
        }
    }
}

impl Config {
    pub fn default_locale() -> String {
        "en-IN".into()
    }

    pub fn default_currency() -> String {
        "INR".into()
    }

    pub fn default_autosave_delay_ms() -> u64 {
        1_500
    }

    pub fn default_pretty_exports() -> bool {
        true
    }

    pub fn autosave_delay(&self) -> Duration {
        Duration::from_millis(self.autosave_delay_ms)
    }

    /// Directory holding the household document.
    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(path) = &self.data_dir {
            return path.clone();
        }

        dirs::data_dir()
            .map(|base| base.join(APP_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.locale.trim().is_empty() {
            return Err(ConfigError::Invalid("locale cannot be empty".into()));
        }
        if self.currency.trim().is_empty() {
            return Err(ConfigError::Invalid("currency cannot be empty".into()));
        }
        Ok(())
    }
}
