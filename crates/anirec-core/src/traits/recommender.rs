use crate::errors::AnirecResult;
use crate::models::RecommendationResult;

/// Similarity-based recommendation over a fixed catalog.
pub trait IRecommender: Send + Sync {
    /// Up to `top_n` items most similar to `name`, excluding the item itself.
    fn get_recommendations(&self, name: &str, top_n: usize)
        -> AnirecResult<RecommendationResult>;

    /// Recommendations using the configured default count.
    fn recommend(&self, name: &str) -> AnirecResult<RecommendationResult>;

    /// Catalog names matching `query` case-insensitively, in resolution order.
    fn search_names(&self, query: &str, limit: usize) -> AnirecResult<Vec<String>>;

    /// Whether requests can currently be served.
    fn is_ready(&self) -> bool;
}
