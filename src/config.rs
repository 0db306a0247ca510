//! Client configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honoured.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_API_URL, DEFAULT_COOKIE_JAR, DEFAULT_LOG_FILTER, DEFAULT_REQUEST_TIMEOUT_SECS,
};

/// Main client configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub log: LogConfig,
}

/// Remote API configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL, without trailing slash
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Persisted session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub cookie_jar: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub rust_log: String,
    pub format: LogFormat,
}

/// Log line format on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            api: ApiConfig::from_env()?,
            session: SessionConfig::from_env()?,
            log: LogConfig::from_env()?,
        })
    }
}

impl ApiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var("HOSTCODE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let base_url = normalize_base_url(&base_url)?;

        Ok(Self {
            base_url,
            timeout_secs: env::var("HOSTCODE_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("HOSTCODE_REQUEST_TIMEOUT_SECS".to_string()))?,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl SessionConfig {
    fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = env::var("HOSTCODE_COOKIE_JAR") {
            return Ok(Self {
                cookie_jar: PathBuf::from(path),
            });
        }

        let home = env::var_os("HOME")
            .or_else(|| env::var_os("USERPROFILE"))
            .ok_or_else(|| ConfigError::Missing("HOSTCODE_COOKIE_JAR or HOME".to_string()))?;

        Ok(Self {
            cookie_jar: PathBuf::from(home).join(DEFAULT_COOKIE_JAR),
        })
    }
}

impl LogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let format = match env::var("HOSTCODE_LOG_FORMAT") {
            Ok(raw) => parse_log_format(&raw)?,
            Err(_) => LogFormat::default(),
        };

        Ok(Self {
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
            format,
        })
    }
}

fn parse_log_format(raw: &str) -> Result<LogFormat, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "pretty" | "text" => Ok(LogFormat::Pretty),
        "json" => Ok(LogFormat::Json),
        _ => Err(ConfigError::InvalidValue("HOSTCODE_LOG_FORMAT".to_string())),
    }
}

/// Strip trailing slashes and reject anything that is not http(s)
fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidValue("HOSTCODE_API_URL".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout() {
        let api = ApiConfig {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        };
        assert_eq!(api.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("https://hostcode.dev/api/").unwrap(),
            "https://hostcode.dev/api"
        );
        assert_eq!(
            normalize_base_url(" http://localhost:8080 ").unwrap(),
            "http://localhost:8080"
        );
        assert!(normalize_base_url("ftp://hostcode.dev").is_err());
        assert!(normalize_base_url("hostcode.dev").is_err());
    }

    #[test]
    fn test_parse_log_format() {
        assert_eq!(parse_log_format("json").unwrap(), LogFormat::Json);
        assert_eq!(parse_log_format(" JSON ").unwrap(), LogFormat::Json);
        assert_eq!(parse_log_format("pretty").unwrap(), LogFormat::Pretty);
        assert_eq!(parse_log_format("").unwrap(), LogFormat::Pretty);
        assert!(parse_log_format("xml").is_err());
    }
}
