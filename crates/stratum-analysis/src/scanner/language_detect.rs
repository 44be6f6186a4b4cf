//! Language detection from file extension.

use std::path::Path;

use serde::{Deserialize, Serialize};
use stratum_core::constants::{PACKAGE_INITIALIZER, PRIMARY_SOURCE_EXTENSIONS};

/// Languages whose files become graph modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Python,
}

impl Language {
    /// Detect language from a file extension string.
    pub fn from_extension(ext: Option<&str>) -> Option<Language> {
        match ext? {
            "py" => Some(Language::Python),
            _ => None,
        }
    }

    /// Detect language from a path.
    pub fn from_path(path: &Path) -> Option<Language> {
        Self::from_extension(path.extension().and_then(|e| e.to_str()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::Python => "Python",
        }
    }

    /// Get the tree-sitter grammar for this language.
    pub fn ts_language(&self) -> tree_sitter::Language {
        match self {
            Language::Python => tree_sitter_python::LANGUAGE.into(),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether the file is a primary source file (parsed, and exempt from the size limit).
pub fn is_primary_source(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| PRIMARY_SOURCE_EXTENSIONS.contains(&ext))
}

/// Whether the file is a package initializer.
pub fn is_package_initializer(path: &Path) -> bool {
    is_primary_source(path)
        && path
            .file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|s| s == PACKAGE_INITIALIZER)
}
