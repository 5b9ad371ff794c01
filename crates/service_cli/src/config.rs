//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables, and
//! command-line flags.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "PRICER_LOG_LEVEL";
/// Environment variable overriding the output format
pub const ENV_OUTPUT_FORMAT: &str = "PRICER_OUTPUT_FORMAT";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unrecognised log level
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unrecognised output format
    #[error("Invalid output format: {0}. Must be one of: json, text")]
    InvalidOutputFormat(String),

    /// Config file missing or malformed
    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything
    Trace,
    /// Dispatch events from the quote library
    Debug,
    /// Command progress
    Info,
    /// Warnings only
    #[default]
    Warn,
    /// Errors only
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// How quote results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `{"details": ..., "price": ...}`
    #[default]
    Json,
    /// Details line followed by the price
    Text,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" | "plain" => Ok(OutputFormat::Text),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Text => f.write_str("text"),
        }
    }
}

/// Resolved CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_from_str")]
    pub log_level: LogLevel,
    /// Output format for quote results
    #[serde(deserialize_with = "deserialize_from_str")]
    pub output_format: OutputFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr<Err = ConfigError>,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            output_format: OutputFormat::Json,
            pretty: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Override fields from a variable lookup
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level.parse()?;
        }
        if let Some(format) = lookup(ENV_OUTPUT_FORMAT) {
            self.output_format = format.parse()?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = level.parse()?;
        } else if cli.verbose {
            self.log_level = self.log_level.min(LogLevel::Debug);
        }
        if let Some(format) = &cli.output_format {
            self.output_format = format.parse()?;
        }
        Ok(())
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::FileError(format!("Failed to render TOML: {}", e)))
    }
}

/// Configuration overrides taken from the command line
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Output format override
    pub output_format: Option<String>,
    /// Lower the log level to at least debug
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.apply_env_with(lookup)?;
    config.merge_with_cli(cli)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(config.pretty);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("verbose").is_err());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("TEXT").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("plain").unwrap(), OutputFormat::Text);
        assert!(OutputFormat::from_str("csv").is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for level in [
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
        ] {
            assert_eq!(LogLevel::from_str(&level.to_string()).unwrap(), level);
        }
        for format in [OutputFormat::Json, OutputFormat::Text] {
            assert_eq!(OutputFormat::from_str(&format.to_string()).unwrap(), format);
        }
    }

    #[test]
    fn test_toml_deserialization() {
        let config = CliConfig::from_toml_str(
            r#"
            log_level = "DEBUG"
            output_format = "text"
            pretty = false
        "#,
        )
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert!(!config.pretty);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = CliConfig::from_toml_str("pretty = false").unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_toml_rejects_bad_values() {
        let err = CliConfig::from_toml_str(r#"output_format = "xml""#).unwrap_err();
        assert!(err.to_string().contains("Configuration file error"));
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::from_file(Path::new("/nonexistent/pricer.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileError(_)));
    }

    #[test]
    fn test_to_toml_round_trips() {
        let config = CliConfig {
            log_level: LogLevel::Info,
            output_format: OutputFormat::Text,
            pretty: false,
        };
        let rendered = config.to_toml().unwrap();
        assert_eq!(CliConfig::from_toml_str(&rendered).unwrap(), config);
    }

    #[test]
    fn test_env_overrides_defaults() {
        let mut config = CliConfig::default();
        config
            .apply_env_with(env(&[(ENV_LOG_LEVEL, "info"), (ENV_OUTPUT_FORMAT, "text")]))
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.output_format, OutputFormat::Text);
    }

    #[test]
    fn test_env_rejects_bad_values() {
        let mut config = CliConfig::default();
        let result = config.apply_env_with(env(&[(ENV_LOG_LEVEL, "loud")]));
        assert!(matches!(result, Err(ConfigError::InvalidLogLevel(_))));
    }

    #[test]
    fn test_cli_overrides_env() {
        let cli = CliArgs {
            log_level: Some("error".to_string()),
            output_format: Some("json".to_string()),
            ..Default::default()
        };
        let config =
            build_config_with(&cli, env(&[(ENV_LOG_LEVEL, "trace"), (ENV_OUTPUT_FORMAT, "text")]))
                .unwrap();
        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_verbose_lowers_level_to_debug() {
        let cli = CliArgs {
            verbose: true,
            ..Default::default()
        };
        let config = build_config_with(&cli, env(&[])).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);

        let config = build_config_with(&cli, env(&[(ENV_LOG_LEVEL, "trace")])).unwrap();
        assert_eq!(config.log_level, LogLevel::Trace);
    }

    #[test]
    fn test_verbose_lowers_env_level() {
        let cli = CliArgs {
            verbose: true,
            ..Default::default()
        };
        let config = build_config_with(&cli, env(&[(ENV_LOG_LEVEL, "error")])).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_explicit_level_beats_verbose() {
        let cli = CliArgs {
            verbose: true,
            log_level: Some("warn".to_string()),
            ..Default::default()
        };
        let config = build_config_with(&cli, env(&[])).unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_build_config_with_defaults() {
        let config = build_config_with(&CliArgs::default(), env(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
    }
}
