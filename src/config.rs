//! Game configuration loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// User-tunable settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Pause before the computer's move appears, in milliseconds.
    #[serde(default = "default_thinking_delay_ms")]
    thinking_delay_ms: u64,

    /// Start with sound cues muted.
    #[serde(default)]
    muted: bool,

    /// Where the terminal UI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_thinking_delay_ms() -> u64 {
    500
}

fn default_log_file() -> PathBuf {
    PathBuf::from("oxo.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            thinking_delay_ms: default_thinking_delay_ms(),
            muted: false,
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(delay_ms = config.thinking_delay_ms, muted = config.muted, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the thinking delay.
    pub fn with_thinking_delay_ms(mut self, delay_ms: u64) -> Self {
        self.thinking_delay_ms = delay_ms;
        self
    }

    /// Overrides the initial mute state.
    pub fn with_muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    /// The thinking delay as a [`Duration`].
    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.thinking_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "muted = true").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert!(*config.muted());
        assert_eq!(*config.thinking_delay_ms(), 500);
        assert_eq!(config.log_file(), &PathBuf::from("oxo.log"));
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "thinking_delay_ms = 1200\nlog_file = \"game.log\"").unwrap();

        let config = GameConfig::from_file(file.path())
            .unwrap()
            .with_thinking_delay_ms(0)
            .with_muted(true);
        assert_eq!(*config.thinking_delay_ms(), 0);
        assert!(*config.muted());
        assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "thinking_delay_ms = \"soon\"").unwrap();

        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
