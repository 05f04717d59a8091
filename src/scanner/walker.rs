//! Sequential directory walker
//!
//! Produces the lazy, single-pass sequence of [`FileTask`]s that the copier
//! consumes with a plain loop. Ordering is lexicographic per directory so a
//! run over an unchanged tree is deterministic.

use crate::types::{FileTask, SurecpError};
use std::path::{Path, PathBuf};

/// Lazy iterator over the regular files of a source tree.
///
/// Finite and single-pass per run, not restartable. Directories and special
/// files (sockets, pipes, devices) are skipped; symlinks are not followed.
/// Traversal errors terminate the sequence with an `Err` item because an
/// unreadable source tree is fatal for the whole run.
pub struct TaskWalk {
    inner: ignore::Walk,
    source_root: PathBuf,
    dest_root: PathBuf,
}

/// Walk `source_root` and yield one [`FileTask`] per regular file.
///
/// Built on `ignore::WalkBuilder` with all standard filters disabled: a copy
/// tool must see hidden files and must not honor .gitignore. Entries are
/// sorted by file name within each directory.
pub fn walk_tasks(source_root: &Path, dest_root: &Path) -> TaskWalk {
    let inner = ignore::WalkBuilder::new(source_root)
        .standard_filters(false)
        .hidden(false)
        .follow_links(false)
        .sort_by_file_name(std::cmp::Ord::cmp)
        .build();

    TaskWalk {
        inner,
        source_root: source_root.to_path_buf(),
        dest_root: dest_root.to_path_buf(),
    }
}

impl Iterator for TaskWalk {
    type Item = Result<FileTask, SurecpError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(Err(err.into())),
            };

            let file_type = match entry.file_type() {
                Some(ft) => ft,
                None => continue, // stdin entry, cannot occur for a directory walk
            };

            if !file_type.is_file() {
                continue;
            }

            // A regular file directly under the root always strips cleanly;
            // anything else was placed there by a racing rename and is skipped.
            match FileTask::new(entry.path(), &self.source_root, &self.dest_root) {
                Some(task) => return Some(Ok(task)),
                None => continue,
            }
        }
    }
}
