//! Custom error types and handling
//!
//! Every network call returns [`AppResult`]. Failures fall into three
//! remote classes (network, API, unknown) plus a few client-local ones.
//! They are caught by the command that issued the request and rendered
//! with [`AppError::user_message`]; nothing is retried automatically.

use crate::config::ConfigError;
use crate::constants::{LOGIN_REQUIRED_MESSAGE, NETWORK_ERROR_MESSAGE, UNKNOWN_ERROR_MESSAGE};

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Remote errors
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Unknown error: {0}")]
    Unknown(String),

    // Client-side gating
    #[error("Login required")]
    LoginRequired,

    #[error("Validation error: {0}")]
    Validation(String),

    // Local resources
    #[error("Credential storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Network(_) => "NETWORK_ERROR",
            Self::Api { .. } => "API_ERROR",
            Self::Unknown(_) => "UNKNOWN_ERROR",
            Self::LoginRequired => "LOGIN_REQUIRED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Text shown to the user in place of the content that failed to load.
    ///
    /// API messages are surfaced verbatim; unknown failures get the generic
    /// retry-later text.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            Self::Api { message, .. } => message.clone(),
            Self::Unknown(_) => UNKNOWN_ERROR_MESSAGE.to_string(),
            Self::LoginRequired => LOGIN_REQUIRED_MESSAGE.to_string(),
            Self::Validation(message) => message.clone(),
            Self::Storage(_) | Self::Configuration(_) => self.to_string(),
        }
    }

    /// Whether this error came back from the server with a structured body
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() || err.is_request() {
            AppError::Network(err.to_string())
        } else {
            AppError::Unknown(err.to_string())
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Configuration(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut problems: Vec<String> = err
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                let message = errors
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "is invalid".to_string());
                format!("{field}: {message}")
            })
            .collect();
        problems.sort();
        AppError::Validation(problems.join("; "))
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
