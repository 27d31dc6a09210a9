//! AnirecErrorCode trait for the service boundary.

/// Maps errors to a stable code string and the HTTP status the service layer
/// should answer with. Every error enum implements this.
pub trait AnirecErrorCode {
    /// Stable error code string (e.g. `"NOT_FOUND"`).
    fn error_code(&self) -> &'static str;

    /// HTTP-equivalent status code.
    fn status_code(&self) -> u16;

    /// Whether the caller sent bad input (4xx) rather than hitting a server fault.
    fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    /// Formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the service boundary.
pub const ARTIFACT_MISSING: &str = "ARTIFACT_MISSING";
pub const ARTIFACT_CORRUPT: &str = "ARTIFACT_CORRUPT";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
pub const SERVICE_UNAVAILABLE: &str = "SERVICE_UNAVAILABLE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
