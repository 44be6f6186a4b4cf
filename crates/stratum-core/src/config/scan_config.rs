//! Scanner configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EXCLUDED_DIRS, DEFAULT_IGNORED_FILES, DEFAULT_MAX_FILE_SIZE};

/// What the orchestrator does when a source file fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseFailurePolicy {
    /// Stop the run and surface the parse error.
    #[default]
    Abort,
    /// Register the module with no imports and record a non-fatal error.
    Skip,
}

impl std::str::FromStr for ParseFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            other => Err(format!("unknown parse failure policy: {other}")),
        }
    }
}

/// Configuration for the source reader.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory names pruned from the walk. Empty means the built-in list.
    pub excluded_dirs: Vec<String>,
    /// File names skipped by the walk. Empty means the built-in list.
    pub ignored_files: Vec<String>,
    /// Maximum size in bytes for non-source files. Default: 1MB.
    pub max_file_size: Option<u64>,
    /// Parse failure handling. Default: abort.
    pub on_parse_error: Option<ParseFailurePolicy>,
}

impl ScanConfig {
    /// Returns the effective max file size, defaulting to 1MB.
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(DEFAULT_MAX_FILE_SIZE)
    }

    /// Returns the effective excluded directory names.
    pub fn effective_excluded_dirs(&self) -> Vec<String> {
        if self.excluded_dirs.is_empty() {
            DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect()
        } else {
            self.excluded_dirs.clone()
        }
    }

    /// Returns the effective ignored file names.
    pub fn effective_ignored_files(&self) -> Vec<String> {
        if self.ignored_files.is_empty() {
            DEFAULT_IGNORED_FILES.iter().map(|s| s.to_string()).collect()
        } else {
            self.ignored_files.clone()
        }
    }

    /// Returns the effective parse failure policy, defaulting to abort.
    pub fn effective_on_parse_error(&self) -> ParseFailurePolicy {
        self.on_parse_error.unwrap_or_default()
    }
}
