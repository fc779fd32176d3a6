//! Application configuration
//!
//! Settings come from an optional TOML file; anything not set there falls
//! back to [`Config::default`]. Command-line flags are applied on top by the
//! binary.
//!
//! ```toml
//! play_interval_ms = 500
//! initial_input = "5, 3, 8, 1"
//! log_file = "/tmp/bubbletty.log"
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default delay between auto-play steps
pub const DEFAULT_PLAY_INTERVAL_MS: u64 = 1000;

/// Failure to load the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Resolved application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Delay between steps while auto-playing
    pub play_interval: Duration,
    /// Text placed in the input field at startup
    pub initial_input: Option<String>,
    /// Where the TUI writes its log
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            play_interval: Duration::from_millis(DEFAULT_PLAY_INTERVAL_MS),
            initial_input: None,
            log_file: std::env::temp_dir().join("bubbletty.log"),
        }
    }
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub play_interval_ms: Option<u64>,
    pub initial_input: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Load from `path`, or return the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse TOML text, filling unset keys with defaults
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        let toml_config: TomlConfig = toml::from_str(text)?;
        Ok(Self::default().merged(toml_config))
    }

    fn merged(mut self, toml_config: TomlConfig) -> Self {
        if let Some(ms) = toml_config.play_interval_ms {
            // Zero would spin the event loop; clamp to one poll tick
            self.play_interval = Duration::from_millis(ms.max(50));
        }
        if toml_config.initial_input.is_some() {
            self.initial_input = toml_config.initial_input;
        }
        if let Some(log_file) = toml_config.log_file {
            self.log_file = log_file;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_path() {
        let config = Config::load(None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.play_interval, Duration::from_millis(1000));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml_str("initial_input = \"3, 1, 2\"").unwrap();
        assert_eq!(config.initial_input.as_deref(), Some("3, 1, 2"));
        assert_eq!(config.play_interval, Config::default().play_interval);
    }

    #[test]
    fn test_play_interval_clamped() {
        let config = Config::from_toml_str("play_interval_ms = 0").unwrap();
        assert_eq!(config.play_interval, Duration::from_millis(50));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::from_toml_str("speed = 3").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "play_interval_ms = 250").unwrap();
        writeln!(file, "log_file = \"/tmp/custom.log\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.play_interval, Duration::from_millis(250));
        assert_eq!(config.log_file, PathBuf::from("/tmp/custom.log"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
