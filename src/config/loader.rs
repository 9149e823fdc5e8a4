//! Configuration Loader
//!
//! Loads and validates the optional TOML configuration file. Every section
//! is optional; the defaults reproduce the stock 0x endpoint and slippage.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::adapters::zerox::{ZeroExConfig, DEFAULT_API_URL, DEFAULT_SLIPPAGE_PERCENTAGE};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub zerox: ZeroExSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// 0x API configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ZeroExSection {
    /// API base URL; switch host for other chains (e.g. polygon.api.0x.org)
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Slippage tolerance as a fraction (0.001 = 0.1%)
    #[serde(default = "default_slippage_percentage")]
    pub slippage_percentage: f64,
    /// Request timeout in seconds; absent means wait indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_slippage_percentage() -> f64 {
    DEFAULT_SLIPPAGE_PERCENTAGE
}

impl Default for ZeroExSection {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            slippage_percentage: default_slippage_percentage(),
            timeout_secs: None,
        }
    }
}

impl ZeroExSection {
    /// Client configuration for the 0x adapter
    pub fn client_config(&self) -> ZeroExConfig {
        ZeroExConfig {
            api_base_url: self.api_url.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Logging configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Load `path` if given, otherwise fall back to defaults
pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Config, ConfigError> {
    match path {
        Some(p) => load_config(p),
        None => Ok(Config::default()),
    }
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.zerox.api_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::ValidationError(format!(
                "api_url must start with http:// or https://, got {}",
                url
            )));
        }

        let slippage = self.zerox.slippage_percentage;
        if !(slippage > 0.0 && slippage < 1.0) {
            return Err(ConfigError::ValidationError(format!(
                "slippage_percentage must be in (0, 1), got {}",
                slippage
            )));
        }

        if self.zerox.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationError(
                "timeout_secs must be > 0 when set".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of {:?}, got {}",
                LOG_LEVELS, self.logging.level
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let file = write_config(
            r#"
[zerox]
api_url = "https://polygon.api.0x.org"
slippage_percentage = 0.005
timeout_secs = 15

[logging]
level = "info"
"#,
        );

        let config = load_config(file.path()).unwrap();

        assert_eq!(config.zerox.api_url, "https://polygon.api.0x.org");
        assert_eq!(config.zerox.slippage_percentage, 0.005);
        assert_eq!(config.zerox.timeout_secs, Some(15));
        assert_eq!(config.logging.level, "info");

        let client = config.zerox.client_config();
        assert_eq!(client.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let file = write_config("");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.zerox.api_url, "https://api.0x.org");
        assert_eq!(config.zerox.slippage_percentage, 0.001);
        assert!(config.zerox.timeout_secs.is_none());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_default_matches_empty_file() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.zerox.client_config().timeout.is_none());
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = load_or_default::<&str>(None).unwrap();
        assert_eq!(config.zerox.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("/nonexistent/path/config.toml");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::IoError(_)));
    }

    #[test]
    fn test_invalid_toml() {
        let file = write_config("[zerox\napi_url = ");
        assert!(matches!(
            load_config(file.path()).unwrap_err(),
            ConfigError::ParseError(_)
        ));
    }

    #[test]
    fn test_invalid_slippage() {
        for bad in ["0.0", "1.0", "-0.1"] {
            let file = write_config(&format!("[zerox]\nslippage_percentage = {}\n", bad));
            let result = load_config(file.path());
            assert!(
                matches!(result, Err(ConfigError::ValidationError(_))),
                "slippage {} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_invalid_api_url() {
        let file = write_config("[zerox]\napi_url = \"ftp://api.0x.org\"\n");
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_invalid_log_level() {
        let file = write_config("[logging]\nlevel = \"loud\"\n");
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let file = write_config("[zerox]\ntimeout_secs = 0\n");
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
