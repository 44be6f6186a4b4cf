//! Shared constants for the Stratum engine.

/// Stratum version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum file size in bytes for scanning (default: 1MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_048_576;

/// Default source directory, relative to the project root.
pub const DEFAULT_SOURCE_DIR: &str = "src";

/// Default tests directory, relative to the project root.
pub const DEFAULT_TESTS_DIR: &str = "tests";

/// Default docs directory, relative to the project root.
pub const DEFAULT_DOCS_DIR: &str = "docs";

/// Default expansion depth for graph views.
pub const DEFAULT_VIEW_DEPTH: u32 = 0;

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "stratum.toml";

/// Directory names pruned from every walk.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    "__pycache__",
    "node_modules",
    "venv",
    ".venv",
    "build",
    "dist",
    "site-packages",
];

/// File names skipped by every walk.
pub const DEFAULT_IGNORED_FILES: &[&str] = &[".DS_Store", "Thumbs.db"];

/// Extensions of primary source files. These are parsed into modules and are
/// exempt from the size limit.
pub const PRIMARY_SOURCE_EXTENSIONS: &[&str] = &["py"];

/// Package initializer file stem.
pub const PACKAGE_INITIALIZER: &str = "__init__";
