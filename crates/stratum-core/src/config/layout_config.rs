//! Project layout configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DOCS_DIR, DEFAULT_SOURCE_DIR, DEFAULT_TESTS_DIR};

/// Where the source, tests, and docs live relative to the project root.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LayoutConfig {
    /// Source root. Default: `src`.
    pub source_dir: Option<String>,
    /// Tests root. Default: `tests`.
    pub tests_dir: Option<String>,
    /// Docs root. Default: `docs`.
    pub docs_dir: Option<String>,
    /// Explicit root package name. Default: final segment of the source root.
    pub root_package: Option<String>,
}

impl LayoutConfig {
    pub fn effective_source_dir(&self) -> &str {
        self.source_dir.as_deref().unwrap_or(DEFAULT_SOURCE_DIR)
    }

    pub fn effective_tests_dir(&self) -> &str {
        self.tests_dir.as_deref().unwrap_or(DEFAULT_TESTS_DIR)
    }

    pub fn effective_docs_dir(&self) -> &str {
        self.docs_dir.as_deref().unwrap_or(DEFAULT_DOCS_DIR)
    }

    /// Absolute source root for a given project root.
    pub fn source_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(self.effective_source_dir())
    }

    /// Root package name: the explicit setting, or the source root's final segment.
    pub fn root_package_name(&self, project_root: &Path) -> Option<String> {
        if let Some(ref name) = self.root_package {
            return Some(name.clone());
        }
        self.source_root(project_root)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
    }
}
