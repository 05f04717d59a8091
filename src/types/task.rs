//! Per-file unit of work

use std::path::{Path, PathBuf};

/// One file to process: where it lives, where it goes, and the path that
/// relates the two. Derived for every regular file found during the walk and
/// dropped as soon as the file has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTask {
    /// Absolute or caller-relative path of the source file
    pub source: PathBuf,
    /// Target path under the destination root
    pub dest: PathBuf,
    /// Path of the file relative to the source root
    pub relative: PathBuf,
}

impl FileTask {
    /// Build a task for `source`, which must live under `source_root`.
    ///
    /// Returns `None` when the path does not sit under the root (e.g. a
    /// symlink escaping the tree).
    pub fn new(source: &Path, source_root: &Path, dest_root: &Path) -> Option<Self> {
        let relative = source.strip_prefix(source_root).ok()?.to_path_buf();
        let dest = dest_root.join(&relative);
        Some(Self {
            source: source.to_path_buf(),
            dest,
            relative,
        })
    }
}
