//! Span definitions per operation: artifact load and recommendation.

/// Create an artifact load span.
#[macro_export]
macro_rules! load_span {
    ($dir:expr) => {
        tracing::info_span!($crate::names::LOAD, dir = %$dir)
    };
}

/// Create a recommendation request span.
#[macro_export]
macro_rules! recommend_span {
    ($query:expr, $top_n:expr) => {
        tracing::info_span!($crate::names::RECOMMEND, query = %$query, top_n = $top_n)
    };
}

/// Create a name search span.
#[macro_export]
macro_rules! search_span {
    ($query:expr) => {
        tracing::debug_span!($crate::names::SEARCH, query = %$query)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const LOAD: &str = "anirec.load";
    pub const RECOMMEND: &str = "anirec.recommend";
    pub const SEARCH: &str = "anirec.search";
}
