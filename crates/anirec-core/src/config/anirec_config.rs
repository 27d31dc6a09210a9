//! Top-level anirec configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ArtifactConfig, EngineConfig, ObservabilityConfig};
use crate::constants::ENV_PREFIX;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ANIREC_*`)
/// 2. Config file (TOML)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnirecConfig {
    pub artifacts: ArtifactConfig,
    pub engine: EngineConfig,
    pub observability: ObservabilityConfig,
}

impl AnirecConfig {
    /// Load configuration from an optional TOML file, then apply environment
    /// overrides and validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file. Unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::ReadFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            },
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `ANIREC_*` overrides using `lookup` to read variables.
    ///
    /// Recognized: `ANIREC_ARTIFACT_DIR`, `ANIREC_DEFAULT_TOP_N`, `ANIREC_LOG`,
    /// `ANIREC_JSON_LOGS`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

        if let Some(dir) = var("ARTIFACT_DIR") {
            self.artifacts.dir = PathBuf::from(dir);
        }
        if let Some(raw) = var("DEFAULT_TOP_N") {
            self.engine.default_top_n =
                raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    field: "engine.default_top_n".to_string(),
                    message: format!("expected a positive integer, got '{raw}'"),
                })?;
        }
        if let Some(level) = var("LOG") {
            self.observability.log_level = level;
        }
        if let Some(raw) = var("JSON_LOGS") {
            self.observability.json_logs = matches!(
                raw.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.default_top_n == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "engine.default_top_n".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.engine.max_top_n == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "engine.max_top_n".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(gamma) = self.engine.gamma {
            if !gamma.is_finite() || gamma <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "engine.gamma".to_string(),
                    message: "must be a positive finite number".to_string(),
                });
            }
        }
        if !self.engine.coef0.is_finite() {
            return Err(ConfigError::ValidationFailed {
                field: "engine.coef0".to_string(),
                message: "must be finite".to_string(),
            });
        }
        if self.artifacts.dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "artifacts.dir".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
