//! Lazy source reader built on `walkdir`.
//!
//! Each call to [`SourceReader::files`] starts a fresh walk. Directories are
//! pruned with `filter_entry`, so an excluded subtree is never descended into.

use std::cell::Cell;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use stratum_core::config::ScanConfig;
use stratum_core::errors::ScanError;
use stratum_core::types::{FxHashSet, SourceFile};
use walkdir::{DirEntry, WalkDir};

use super::language_detect::is_primary_source;
use super::types::ScanStats;

/// Marker prefix of hidden directories.
const HIDDEN_PREFIX: char = '.';

/// Walks a source tree and yields `SourceFile` records.
#[derive(Debug, Clone)]
pub struct SourceReader {
    root: PathBuf,
    excluded_dirs: FxHashSet<String>,
    ignored_files: FxHashSet<String>,
    max_file_size: u64,
}

impl SourceReader {
    /// Create a reader over `root`. The root may be a directory or a single file.
    pub fn open(root: impl Into<PathBuf>, config: &ScanConfig) -> Result<Self, ScanError> {
        let root = root.into();
        match fs::metadata(&root) {
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ScanError::RootNotFound { path: root });
            }
            Err(source) => return Err(ScanError::IoError { path: root, source }),
        }
        Ok(Self {
            root,
            excluded_dirs: config.effective_excluded_dirs().into_iter().collect(),
            ignored_files: config.effective_ignored_files().into_iter().collect(),
            max_file_size: config.effective_max_file_size(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Start a new pass over the tree.
    pub fn files(&self) -> SourceFiles<'_> {
        let pruned = Rc::new(Cell::new(0usize));

        if self.root.is_file() {
            tracing::debug!(root = %self.root.display(), "scan root is a single file");
            return SourceFiles {
                reader: self,
                walk: None,
                single: Some(self.root.clone()),
                pruned,
                stats: ScanStats::default(),
            };
        }

        let counter = Rc::clone(&pruned);
        let walk = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| {
                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    return true;
                }
                if self.is_excluded_dir(entry.file_name()) {
                    counter.set(counter.get() + 1);
                    return false;
                }
                true
            });

        tracing::debug!(root = %self.root.display(), "scan started");
        SourceFiles {
            reader: self,
            walk: Some(Box::new(walk)),
            single: None,
            pruned,
            stats: ScanStats::default(),
        }
    }

    fn is_excluded_dir(&self, name: &OsStr) -> bool {
        let name = name.to_string_lossy();
        name.starts_with(HIDDEN_PREFIX) || self.excluded_dirs.contains(name.as_ref())
    }

    fn is_ignored_file(&self, name: &OsStr) -> bool {
        self.ignored_files.contains(name.to_string_lossy().as_ref())
    }

    /// Size policy: oversized files are skipped unless they are primary
    /// source files, which are always kept.
    fn exceeds_size_limit(&self, entry: &DirEntry) -> bool {
        if is_primary_source(entry.path()) {
            return false;
        }
        match entry.metadata() {
            Ok(meta) => meta.len() > self.max_file_size,
            Err(_) => false,
        }
    }
}

/// One pass over the tree. Stops reading as soon as the consumer stops pulling.
pub struct SourceFiles<'a> {
    reader: &'a SourceReader,
    walk: Option<Box<dyn Iterator<Item = walkdir::Result<DirEntry>> + 'a>>,
    single: Option<PathBuf>,
    pruned: Rc<Cell<usize>>,
    stats: ScanStats,
}

impl SourceFiles<'_> {
    /// Counters for the records pulled so far.
    pub fn stats(&self) -> ScanStats {
        ScanStats {
            dirs_excluded: self.pruned.get(),
            ..self.stats.clone()
        }
    }

    fn emit(&mut self, path: &Path) -> SourceFile {
        let file = read_source_file(path);
        self.stats.files_yielded += 1;
        if !file.is_readable() {
            self.stats.files_unreadable += 1;
        }
        file
    }
}

impl Iterator for SourceFiles<'_> {
    type Item = SourceFile;

    fn next(&mut self) -> Option<SourceFile> {
        if let Some(path) = self.single.take() {
            return Some(self.emit(&path));
        }

        loop {
            let entry = match self.walk.as_mut()?.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable directory entry");
                    self.stats.walk_errors += 1;
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            if self.reader.is_ignored_file(entry.file_name()) {
                self.stats.files_ignored += 1;
                continue;
            }
            if self.reader.exceeds_size_limit(&entry) {
                tracing::debug!(path = %entry.path().display(), "skipping oversized file");
                self.stats.files_skipped_large += 1;
                continue;
            }

            return Some(self.emit(entry.path()));
        }
    }
}

/// Read a file as UTF-8 text. Failures become data on the record.
pub fn read_source_file(path: &Path) -> SourceFile {
    match fs::read(path) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => SourceFile::readable(path, text),
            Err(e) => SourceFile::unreadable(
                path,
                format!("not valid UTF-8 text: {}", e.utf8_error()),
            ),
        },
        Err(e) => SourceFile::unreadable(path, format!("read failed: {e}")),
    }
}
