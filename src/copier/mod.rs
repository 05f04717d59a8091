//! The verify-and-retry copy core
//!
//! Walks the source tree and applies the per-file policy: skip when the
//! destination already matches by digest, otherwise copy, re-hash the
//! destination, and retry once on mismatch before recording a failure.

use crate::config::Config;
use crate::hash::compute_digest;
use crate::logs;
use crate::types::{FileTask, RunReport, SurecpError};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Total copy+verify attempts per file: one initial attempt plus one retry.
pub const RETRY_ATTEMPTS: u32 = 2;

/// Per-file status events emitted while copying.
///
/// The copier reports progress through these instead of printing, so the
/// console stays a thin collaborator wired up by the binary.
#[derive(Debug)]
pub enum CopyEvent {
    /// Destination already holds identical content; nothing was written.
    AlreadyExists { dest: PathBuf },
    /// File was copied and the destination digest matched.
    Copied { dest: PathBuf },
    /// A copy attempt produced mismatched content.
    HashMismatch { source: PathBuf },
}

impl std::fmt::Display for CopyEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CopyEvent::AlreadyExists { dest } => {
                write!(f, "Already exist: [{}]", dest.display())
            }
            CopyEvent::Copied { dest } => write!(f, "Copied: [{}]", dest.display()),
            CopyEvent::HashMismatch { source } => {
                write!(f, "Hash mismatch. Retrying: [{}]", source.display())
            }
        }
    }
}

/// Optional callback used to receive per-file status events.
pub type EventCallback = dyn Fn(&CopyEvent);

/// Copy every regular file under `config.source` into `config.destination`.
///
/// Files are processed strictly sequentially in walk order; each one reaches
/// a terminal outcome (already-present, copied, failed) and bumps exactly one
/// `report` counter before the next file is considered. Destination
/// directories are created as needed; nothing is ever deleted.
///
/// # Errors
///
/// Any [`SurecpError`] aborts the walk immediately: these indicate the
/// filesystem or hashing layer is unusable for the run, not transient
/// corruption of one copy. `report` keeps whatever counts had accumulated,
/// so the caller can still render a partial summary.
pub fn copy_tree(
    config: &Config,
    report: &mut RunReport,
    on_event: Option<&EventCallback>,
) -> Result<(), SurecpError> {
    for task in crate::scanner::walk_tasks(&config.source, &config.destination) {
        let task = task?;
        process_file_with(&task, config, report, copy_file, on_event)?;
    }
    Ok(())
}

/// Apply the decision policy to one file, generic over the copy primitive so
/// tests can inject a corrupting copy.
fn process_file_with<F>(
    task: &FileTask,
    config: &Config,
    report: &mut RunReport,
    mut copy: F,
    on_event: Option<&EventCallback>,
) -> Result<(), SurecpError>
where
    F: FnMut(&Path, &Path) -> Result<u64, SurecpError>,
{
    // Skip path: both digests are computed even here. Verification cost is
    // paid on every file, correctness over speed.
    if task.dest.exists() && compute_digest(&task.source)? == compute_digest(&task.dest)? {
        emit(
            on_event,
            CopyEvent::AlreadyExists {
                dest: absolute(&task.dest),
            },
        );
        report.record_existent();
        return Ok(());
    }

    let mut attempts = 0;
    loop {
        // Re-created on every attempt; redundant after the first but harmless.
        if let Some(parent) = task.dest.parent() {
            fs::create_dir_all(parent)?;
        }
        copy(&task.source, &task.dest)?;

        if compute_digest(&task.source)? == compute_digest(&task.dest)? {
            emit(
                on_event,
                CopyEvent::Copied {
                    dest: absolute(&task.dest),
                },
            );
            report.record_copied();
            return Ok(());
        }

        // The mismatch line is emitted after every failed comparison, the
        // exhausting one included.
        emit(
            on_event,
            CopyEvent::HashMismatch {
                source: absolute(&task.source),
            },
        );
        attempts += 1;
        if attempts == RETRY_ATTEMPTS {
            break;
        }
    }

    report.record_failed();
    logs::append_failure(&config.failure_log, &task.source)?;
    Ok(())
}

/// Copy the full byte content of `src` over `dest`, truncating any previous
/// content. No temp file, no atomic rename: an interrupted run may leave a
/// partial destination, which the next run's verification catches.
fn copy_file(src: &Path, dest: &Path) -> Result<u64, SurecpError> {
    let mut src_file = File::open(src)?;
    let mut dest_file = File::create(dest)?;

    let mut buffer = vec![0u8; 128 * 1024];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = src_file.read(&mut buffer)?;

        if bytes_read == 0 {
            break; // EOF
        }

        dest_file.write_all(&buffer[0..bytes_read])?;
        total_bytes += bytes_read as u64;
    }

    dest_file.flush()?;
    Ok(total_bytes)
}

fn emit(on_event: Option<&EventCallback>, event: CopyEvent) {
    if let Some(callback) = on_event {
        callback(&event);
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
