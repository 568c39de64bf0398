// ABOUTME: Application configuration handling.
// ABOUTME: Loads and saves loop timing, logging, and layout settings from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::PaneSpec;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Render loop interval in milliseconds
    pub tick_ms: u64,

    /// Default log filter when `TERMPANE_LOG` is not set
    pub log_level: String,

    /// Log file location (defaults to the platform state directory)
    pub log_file: Option<PathBuf>,

    /// Pane layout; the application supplies its own when absent
    pub layout: Option<PaneSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: 1000,
            log_level: "info".to_string(),
            log_file: None,
            layout: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

impl Config {
    /// Get the default config file path (~/.config/termpane/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("termpane").join("config.toml"))
    }

    /// Get the default log file path (~/.local/state/termpane/termpane.log)
    pub fn default_log_path() -> Option<PathBuf> {
        dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .map(|p| p.join("termpane").join("termpane.log"))
    }

    /// Render loop interval; never shorter than one millisecond
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    /// Configured log path, falling back to the default location
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(Self::default_log_path)
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
