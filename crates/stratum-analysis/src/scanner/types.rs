//! Scanner data types.

use serde::{Deserialize, Serialize};

/// Counters for one pass over the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Records yielded, readable or not.
    pub files_yielded: usize,
    /// Yielded records whose content could not be decoded.
    pub files_unreadable: usize,
    /// Directories pruned by name or hidden marker.
    pub dirs_excluded: usize,
    /// Files skipped by name.
    pub files_ignored: usize,
    /// Non-source files skipped for exceeding the size limit.
    pub files_skipped_large: usize,
    /// Walk errors (permissions, vanished entries). Logged and skipped.
    pub walk_errors: usize,
}
