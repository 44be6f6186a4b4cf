//! Raw inputs to graph construction: file records and parsed imports.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::collections::SmallVec4;

/// One file yielded by the source reader.
///
/// Unreadable content is data, not an error: `content` is `None` and
/// `reading_error` says why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub path: PathBuf,
    pub content: Option<String>,
    pub reading_error: Option<String>,
}

impl SourceFile {
    /// A file whose text decoded cleanly.
    pub fn readable(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: Some(content.into()),
            reading_error: None,
        }
    }

    /// A file that could not be read as text.
    pub fn unreadable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: None,
            reading_error: Some(reason.into()),
        }
    }

    pub fn is_readable(&self) -> bool {
        self.content.is_some() && self.reading_error.is_none()
    }
}

/// One import statement, with relative imports already anchored to a base
/// module path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedModule {
    /// Dotted module path. Empty when a relative import resolves to the root.
    pub module_path: String,
    /// 1-based line of the statement.
    pub line_number: u32,
    pub is_relative: bool,
    /// Symbols named by a `from ... import` statement, in source order,
    /// without duplicates. Empty for whole-module imports.
    pub imported_names: SmallVec4<String>,
}

impl ImportedModule {
    pub fn new(module_path: impl Into<String>, line_number: u32, is_relative: bool) -> Self {
        Self {
            module_path: module_path.into(),
            line_number,
            is_relative,
            imported_names: SmallVec4::new(),
        }
    }

    /// Add a symbol name, keeping first-seen order and dropping repeats.
    pub fn push_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.imported_names.contains(&name) {
            self.imported_names.push(name);
        }
    }

    /// Whether this import brings `symbol` into scope by name.
    pub fn brings(&self, symbol: &str) -> bool {
        self.imported_names.iter().any(|n| n == symbol)
    }
}
