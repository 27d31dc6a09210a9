//! Artifact data model and per-request result types.

pub mod feature_matrix;
pub mod item_metadata;
pub mod name_index;
pub mod rating;
pub mod recommendation;
pub mod store_status;
pub mod vectorizer;

pub use feature_matrix::{FeatureMatrix, SparseRow};
pub use item_metadata::{ItemMetadata, MetadataRecord};
pub use name_index::{NameEntry, NameIndex};
pub use rating::{Rating, RatingCategory};
pub use recommendation::{Recommendation, RecommendationResult};
pub use store_status::{StoreState, StoreStatus};
pub use vectorizer::VectorizerInfo;
