//! StratumErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this so external consumers can branch on a
/// stable code string instead of the human-readable message.
pub trait StratumErrorCode {
    /// Returns the error code string (e.g., "SCAN_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const SYNTAX_ERROR: &str = "SYNTAX_ERROR";
pub const GRAPH_ERROR: &str = "GRAPH_ERROR";
pub const CLASSIFICATION_ERROR: &str = "CLASSIFICATION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const PIPELINE_ERROR: &str = "PIPELINE_ERROR";
