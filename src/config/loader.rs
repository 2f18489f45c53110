use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/tudu/config.toml` on Unix/macOS, or equivalent on
    /// other platforms via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("tudu").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from an explicit path.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `server.base_url` is a parseable http(s) URL
    /// - `ui.tick_rate_ms` is nonzero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.server.base_url).map_err(|e| {
            ConfigError::ValidationError {
                message: format!("server.base_url '{}' is not a valid URL: {e}", self.server.base_url),
            }
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!("server.base_url must be http or https, got '{}'", url.scheme()),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn parses_partial_file_with_defaults_for_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[server]\nbase_url = \"https://todo.example.net\"").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.server.base_url, "https://todo.example.net");
        assert_eq!(config.ui.tick_rate_ms, 250);
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let mut config = Config::default();
        config.server.base_url = "not a url".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let mut config = Config::default();
        config.server.base_url = "ftp://example.net".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn rejects_zero_tick_rate() {
        let mut config = Config::default();
        config.ui.tick_rate_ms = 0;
        assert!(config.validate().is_err());
    }
}
