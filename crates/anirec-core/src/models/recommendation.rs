//! Per-request result types.

use serde::{Deserialize, Serialize};

use super::Rating;

/// One ranked recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// 1-based position in the result list.
    pub rank: usize,
    pub anime_name: String,
    pub rating: Rating,
    /// Kernel score rounded to 4 decimal digits.
    pub similarity_score: f64,
}

/// Ranked recommendations for a resolved query name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// Catalog name the query resolved to (differs from the raw query after a
    /// fuzzy match).
    pub input_anime: String,
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationResult {
    pub fn len(&self) -> usize {
        self.recommendations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }

    /// Names in rank order.
    pub fn names(&self) -> Vec<&str> {
        self.recommendations
            .iter()
            .map(|r| r.anime_name.as_str())
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
