/// anirec version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sentinel emitted in place of a missing rating.
pub const RATING_NOT_AVAILABLE: &str = "N/A";

/// Decimal digits kept on similarity scores in formatted results.
pub const SIMILARITY_DECIMALS: usize = 4;

/// Sigmoid kernel offset used when none is configured.
pub const DEFAULT_SIGMOID_COEF0: f64 = 1.0;

/// Environment variable prefix for config overrides.
pub const ENV_PREFIX: &str = "ANIREC_";
