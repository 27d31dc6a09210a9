use serde::{Deserialize, Serialize};

use super::defaults;

/// Rule for picking one key when several catalog names contain the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuzzyMatchPolicy {
    /// Lexicographically smallest matching name.
    #[default]
    Lexicographic,
    /// Shortest matching name, ties broken lexicographically.
    Shortest,
}

/// Recommendation engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Result count used when the caller does not ask for one.
    pub default_top_n: usize,
    /// Optional upper clamp on requested result counts.
    pub max_top_n: Option<usize>,
    /// Sigmoid kernel slope. `None` means `1 / n_features`.
    pub gamma: Option<f64>,
    /// Sigmoid kernel offset.
    pub coef0: f64,
    pub fuzzy_match: FuzzyMatchPolicy,
    /// Catalogs with at least this many rows are scored with rayon.
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_top_n: defaults::DEFAULT_TOP_N,
            max_top_n: None,
            gamma: None,
            coef0: defaults::DEFAULT_COEF0,
            fuzzy_match: FuzzyMatchPolicy::default(),
            parallel_threshold: defaults::DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}
