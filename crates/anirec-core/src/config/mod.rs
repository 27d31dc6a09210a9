//! Configuration for anirec.
//! TOML-based, resolved as: env (`ANIREC_*`) > config file > compiled defaults.

pub mod anirec_config;
pub mod artifact_config;
pub mod defaults;
pub mod engine_config;
pub mod observability_config;

pub use anirec_config::AnirecConfig;
pub use artifact_config::ArtifactConfig;
pub use engine_config::{EngineConfig, FuzzyMatchPolicy};
pub use observability_config::ObservabilityConfig;
