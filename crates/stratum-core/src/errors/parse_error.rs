//! Parser errors.

use std::path::PathBuf;

use super::error_code::{self, StratumErrorCode};

/// Errors that can occur while extracting imports from a source file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The source text is not syntactically valid. Carries the offending path
    /// so the orchestrator can decide whether to skip the file or abort.
    #[error("Syntax error in {path} at line {line}: {message}")]
    Syntax {
        path: PathBuf,
        line: u32,
        message: String,
    },

    #[error("Grammar unavailable: {message}")]
    GrammarUnavailable { message: String },

    #[error("Unsupported file: {path}")]
    UnsupportedFile { path: PathBuf },
}

impl ParseError {
    /// Path of the file that failed to parse, when known.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Syntax { path, .. } | Self::UnsupportedFile { path } => Some(path),
            Self::GrammarUnavailable { .. } => None,
        }
    }
}

impl StratumErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Syntax { .. } => error_code::SYNTAX_ERROR,
            _ => error_code::PARSE_ERROR,
        }
    }
}
