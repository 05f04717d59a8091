//! Persistent run logs
//!
//! Two append-only files, both relative to the working directory by default:
//! the summary log gets one block per run, the failure log one line per file
//! that exhausted its retries. Neither is ever read back by surecp.

use crate::types::RunReport;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Render the end-of-run summary block.
///
/// The block is delimited by a line of `=` and carries the three outcome
/// counts; the same text is printed to the console and appended to the
/// summary log.
pub fn format_summary(report: &RunReport) -> String {
    format!(
        "\n\n{}\nAlready existent files: {}\nSuccessfully copied files: {}\nFailed to copy files: {}\n\n",
        "=".repeat(66),
        report.existent_files,
        report.copied_files,
        report.failed_files
    )
}

/// Append the summary block for one run to `path`, creating the file on
/// first use. Repeated runs accumulate a history.
pub fn append_summary(path: &Path, report: &RunReport) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(format_summary(report).as_bytes())
}

/// Append one failure record for a file that exhausted its retry budget.
pub fn append_failure(path: &Path, source: &Path) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "Failed: [{}]", source.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn sample_report() -> RunReport {
        RunReport {
            existent_files: 3,
            copied_files: 5,
            failed_files: 1,
        }
    }

    #[test]
    fn test_summary_block_format() {
        let summary = format_summary(&sample_report());

        assert!(summary.contains(&"=".repeat(66)));
        assert!(summary.contains("Already existent files: 3"));
        assert!(summary.contains("Successfully copied files: 5"));
        assert!(summary.contains("Failed to copy files: 1"));
    }

    #[test]
    fn test_append_summary_accumulates_runs() {
        let dir = TempDir::new().expect("create tempdir");
        let log = dir.path().join("Log.txt");

        append_summary(&log, &sample_report()).expect("first append");
        append_summary(&log, &RunReport::new()).expect("second append");

        let content = fs::read_to_string(&log).expect("read log");
        assert_eq!(content.matches(&"=".repeat(66)).count(), 2);
        assert!(content.contains("Successfully copied files: 5"));
        assert!(content.contains("Successfully copied files: 0"));
    }

    #[test]
    fn test_append_failure_one_line_per_file() {
        let dir = TempDir::new().expect("create tempdir");
        let log = dir.path().join("FailedCopyLog.txt");

        append_failure(&log, &PathBuf::from("/data/one.bin")).expect("first append");
        append_failure(&log, &PathBuf::from("/data/two.bin")).expect("second append");

        let content = fs::read_to_string(&log).expect("read log");
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec![
            "Failed: [/data/one.bin]",
            "Failed: [/data/two.bin]",
        ]);
    }
}
