//! Classification errors.

use super::error_code::{self, StratumErrorCode};

/// Errors that can occur while compiling a rule registry.
#[derive(Debug, thiserror::Error)]
pub enum ClassificationError {
    #[error("Invalid rule pattern {pattern:?}: {message}")]
    InvalidRulePattern { pattern: String, message: String },
}

impl StratumErrorCode for ClassificationError {
    fn error_code(&self) -> &'static str {
        error_code::CLASSIFICATION_ERROR
    }
}
