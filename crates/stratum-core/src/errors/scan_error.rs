//! Scanner errors.

use std::path::PathBuf;

use super::error_code::{self, StratumErrorCode};

/// Errors that can occur while enumerating the source tree.
///
/// Unreadable file contents are never errors: they travel as data on the
/// `SourceFile` record.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Scan root does not exist: {path}")]
    RootNotFound { path: PathBuf },

    #[error("IO error scanning {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl StratumErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        error_code::SCAN_ERROR
    }
}
