//! # anirec-core
//!
//! Foundation crate for the anirec similarity engine.
//! Defines the artifact data model, result types, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AnirecConfig;
pub use errors::{AnirecError, AnirecResult};
pub use models::{
    FeatureMatrix, ItemMetadata, NameIndex, Rating, Recommendation, RecommendationResult,
    VectorizerInfo,
};
