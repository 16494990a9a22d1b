//! Node configuration.
//!
//! Settings are layered, later sources winning:
//!
//! 1. built-in defaults
//! 2. an optional configuration file (`--config`)
//! 3. `RSVP_*` environment variables (`RSVP_API_ADDR`, `RSVP_LOG_LEVEL`, `RSVP_LOG_FORMAT`)
//! 4. explicit command-line overrides

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

use crate::observability::LogFormat;

/// Default API listen address.
pub const DEFAULT_API_ADDR: &str = "127.0.0.1:8088";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A value was read but is not acceptable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Values given on the command line that take precedence over every other source.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_addr: Option<SocketAddr>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
}

/// Configuration for the RSVP node.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NodeConfig {
    /// HTTP listen address.
    pub api_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            api_addr: SocketAddr::from(([127, 0, 0, 1], 8088)),
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl NodeConfig {
    /// Loads the configuration from every source and validates it.
    pub fn load(file: Option<&Path>, overrides: Overrides) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("api_addr", DEFAULT_API_ADDR)?
            .set_default("log_level", "info")?
            .set_default("log_format", LogFormat::Pretty.as_str())?;

        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let settings = builder
            .add_source(config::Environment::with_prefix("RSVP"))
            .set_override_option("api_addr", overrides.api_addr.map(|a| a.to_string()))?
            .set_override_option("log_level", overrides.log_level)?
            .set_override_option("log_format", overrides.log_format.map(|f| f.as_str()))?
            .build()?;

        let config: NodeConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialization alone cannot reject.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown log level '{}', expected one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = NodeConfig::default();
        assert_eq!(config.api_addr.to_string(), DEFAULT_API_ADDR);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_values_are_read() {
        let file = write_config(
            r#"
api_addr = "0.0.0.0:9000"
log_level = "debug"
log_format = "json"
"#,
        );

        let config = NodeConfig::load(Some(file.path()), Overrides::default()).unwrap();
        assert_eq!(config.api_addr, "0.0.0.0:9000".parse().unwrap());
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config("log_level = \"warn\"\n");

        let config = NodeConfig::load(Some(file.path()), Overrides::default()).unwrap();
        assert_eq!(config.api_addr.to_string(), DEFAULT_API_ADDR);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_overrides_win_over_file() {
        let file = write_config("api_addr = \"0.0.0.0:9000\"\nlog_format = \"json\"\n");
        let overrides = Overrides {
            api_addr: Some("127.0.0.1:7000".parse().unwrap()),
            log_level: None,
            log_format: Some(LogFormat::Pretty),
        };

        let config = NodeConfig::load(Some(file.path()), overrides).unwrap();
        assert_eq!(config.api_addr, "127.0.0.1:7000".parse().unwrap());
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let result = NodeConfig::load(Some(&path), Overrides::default());
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let file = write_config("log_format = \"xml\"\n");

        let result = NodeConfig::load(Some(file.path()), Overrides::default());
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let config = NodeConfig {
            log_level: "loud".into(),
            ..NodeConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = NodeConfig {
            log_level: "WARN".into(),
            ..NodeConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
