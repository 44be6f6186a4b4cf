//! Root-bounded conversion between dotted module paths and file paths.

use std::path::{Component, Path, PathBuf};

use stratum_core::constants::PACKAGE_INITIALIZER;

const SOURCE_EXTENSION: &str = "py";

/// Converts between logical and physical module paths under one source root.
///
/// Both directions only check existence; nothing is read.
#[derive(Debug, Clone)]
pub struct ModulePathResolver {
    root: PathBuf,
}

impl ModulePathResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Dotted path to file. The package initializer form wins over a plain
    /// module of the same name.
    pub fn forward(&self, logical_path: &str) -> Option<PathBuf> {
        let mut dir = self.root.clone();
        for segment in logical_path.split('.').filter(|s| !s.is_empty()) {
            if segment == ".." || segment.contains(['/', '\\']) {
                return None;
            }
            dir.push(segment);
        }

        let initializer = dir.join(format!("{PACKAGE_INITIALIZER}.{SOURCE_EXTENSION}"));
        if initializer.is_file() {
            return Some(initializer);
        }
        if logical_path.is_empty() {
            return None;
        }
        let module = dir.with_extension(SOURCE_EXTENSION);
        module.is_file().then_some(module)
    }

    /// File to dotted path. `None` when the file is not under the root.
    /// The root package initializer maps to the empty path.
    pub fn reverse(&self, file_path: &Path) -> Option<String> {
        let relative = file_path.strip_prefix(&self.root).ok()?;
        let mut segments = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(part) => segments.push(part.to_string_lossy().into_owned()),
                Component::CurDir => {}
                _ => return None,
            }
        }

        let last = segments.pop()?;
        let stem = match last.rsplit_once('.') {
            Some((stem, _ext)) if !stem.is_empty() => stem.to_string(),
            _ => last,
        };
        if stem != PACKAGE_INITIALIZER {
            segments.push(stem);
        }
        Some(segments.join("."))
    }
}
