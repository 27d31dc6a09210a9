use super::config_error::ConfigError;
use super::error_code::{self, AnirecErrorCode};

/// Errors raised while loading artifacts or serving a recommendation request.
#[derive(Debug, thiserror::Error)]
pub enum AnirecError {
    /// An artifact file is absent from the artifact directory.
    #[error("artifact missing: {artifact} ({path})")]
    ArtifactMissing { artifact: String, path: String },

    /// An artifact failed to deserialize or disagrees with its siblings.
    #[error("artifact corrupt: {artifact}: {reason}")]
    ArtifactCorrupt { artifact: String, reason: String },

    /// Neither exact nor fuzzy name resolution matched.
    #[error("anime '{name}' not found in catalog")]
    NotFound { name: String },

    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// The artifact store is not ready to serve.
    #[error("service unavailable: {reason}")]
    ServiceUnavailable { reason: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AnirecError {
    pub fn corrupt(artifact: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ArtifactCorrupt {
            artifact: artifact.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl AnirecErrorCode for AnirecError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ArtifactMissing { .. } => error_code::ARTIFACT_MISSING,
            Self::ArtifactCorrupt { .. } => error_code::ARTIFACT_CORRUPT,
            Self::NotFound { .. } => error_code::NOT_FOUND,
            Self::InvalidArgument { .. } => error_code::INVALID_ARGUMENT,
            Self::ServiceUnavailable { .. } => error_code::SERVICE_UNAVAILABLE,
            Self::Config(e) => e.error_code(),
        }
    }

    fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::InvalidArgument { .. } => 400,
            Self::ServiceUnavailable { .. } => 503,
            Self::ArtifactMissing { .. } | Self::ArtifactCorrupt { .. } => 500,
            Self::Config(e) => e.status_code(),
        }
    }
}
