//! Error handling for anirec.
//! One top-level enum for request/load failures plus `ConfigError`, `thiserror` only.

pub mod anirec_error;
pub mod config_error;
pub mod error_code;

pub use anirec_error::AnirecError;
pub use config_error::ConfigError;
pub use error_code::AnirecErrorCode;

/// Result alias used across the workspace.
pub type AnirecResult<T> = Result<T, AnirecError>;
