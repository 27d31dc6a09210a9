//! Compiled defaults for every config section.

// Artifacts
pub const DEFAULT_ARTIFACT_DIR: &str = "model_assets";
pub const DEFAULT_VECTORIZER_FILE: &str = "tfv.json";
pub const DEFAULT_MATRIX_FILE: &str = "tfv_matrix.json";
pub const DEFAULT_NAME_INDEX_FILE: &str = "anime_name_indices.json";
pub const DEFAULT_METADATA_FILE: &str = "anime_metadata.json";

// Engine
pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_COEF0: f64 = crate::constants::DEFAULT_SIGMOID_COEF0;
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 2048;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
