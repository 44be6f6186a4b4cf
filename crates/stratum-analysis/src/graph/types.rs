//! Working registry used while the graph is being built.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use stratum_core::constants::PACKAGE_INITIALIZER;
use stratum_core::types::{FxHashMap, ImportedModule};

use crate::scanner::language_detect::is_package_initializer;

/// One discovered module and its raw, unresolved imports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedModule {
    pub logical_path: String,
    pub file_path: PathBuf,
    pub content: Option<String>,
    pub raw_imports: Vec<ImportedModule>,
}

impl ScannedModule {
    pub fn is_package(&self) -> bool {
        is_package_initializer(&self.file_path)
    }
}

/// Counters from one build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    pub modules: usize,
    pub resolved_imports: usize,
    /// Imports with no internal target (external libraries, missing modules).
    pub dropped_imports: usize,
    pub unreadable: usize,
    pub unparsable: usize,
    /// Files that are not source files and never become modules.
    pub skipped_files: usize,
}

/// Scanned modules keyed by logical path.
///
/// The source root's own initializer has an empty logical path; it is keyed
/// by the root package name so that `import <root_package>` finds it.
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    modules: FxHashMap<String, ScannedModule>,
    root_package: Option<String>,
}

impl ModuleRegistry {
    pub fn new(root_package: Option<String>) -> Self {
        Self {
            modules: FxHashMap::default(),
            root_package: root_package.filter(|p| !p.is_empty()),
        }
    }

    pub fn root_package(&self) -> Option<&str> {
        self.root_package.as_deref()
    }

    /// Registry key for a logical path.
    pub fn key_for(&self, logical_path: &str) -> String {
        if logical_path.is_empty() {
            self.root_package
                .clone()
                .unwrap_or_else(|| PACKAGE_INITIALIZER.to_string())
        } else {
            logical_path.to_string()
        }
    }

    /// Register a module under its key. Returns the key.
    pub fn insert(&mut self, mut module: ScannedModule) -> String {
        let key = self.key_for(&module.logical_path);
        module.logical_path = key.clone();
        self.modules.insert(key.clone(), module);
        key
    }

    pub fn get(&self, id: &str) -> Option<&ScannedModule> {
        self.modules.get(&self.key_for(id))
    }

    /// Canonical id of `logical_path`, if such a module exists.
    pub fn lookup(&self, logical_path: &str) -> Option<&str> {
        self.modules
            .get_key_value(&self.key_for(logical_path))
            .map(|(k, _)| k.as_str())
    }

    pub fn contains(&self, logical_path: &str) -> bool {
        self.lookup(logical_path).is_some()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn modules(&self) -> impl Iterator<Item = &ScannedModule> {
        self.modules.values()
    }

    /// Candidate spellings of an absolute module path: as written, then with a
    /// leading segment naming the root package removed.
    pub fn normalized_candidates(&self, module_path: &str, is_relative: bool) -> Vec<String> {
        let mut candidates = vec![module_path.to_string()];
        if is_relative {
            return candidates;
        }
        if let Some(root) = self.root_package.as_deref() {
            if module_path == root {
                candidates.push(String::new());
            } else if let Some(rest) = module_path
                .strip_prefix(root)
                .and_then(|r| r.strip_prefix('.'))
            {
                candidates.push(rest.to_string());
            }
        }
        candidates
    }

    /// Internal target of an import's module path, if any.
    pub fn resolve_module(&self, import: &ImportedModule) -> Option<String> {
        self.normalized_candidates(&import.module_path, import.is_relative)
            .iter()
            .find_map(|c| self.lookup(c).map(str::to_string))
    }

    /// Internal submodule `<module>.<name>`, trying each spelling of the module.
    pub fn resolve_submodule(&self, import: &ImportedModule, name: &str) -> Option<String> {
        self.normalized_candidates(&import.module_path, import.is_relative)
            .iter()
            .find_map(|base| self.lookup(&join_module(base, name)).map(str::to_string))
    }
}

/// Join a dotted base and a child name. An empty base is the root.
pub fn join_module(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{base}.{name}")
    }
}
