//! Configuration errors.

use super::error_code::{self, AnirecErrorCode};

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    /// The file exists but could not be read (permissions, invalid UTF-8, ...).
    #[error("failed to read config file {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl AnirecErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }

    fn status_code(&self) -> u16 {
        500
    }
}
