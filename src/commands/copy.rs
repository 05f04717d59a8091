//! Main copy command

use crate::copier::{copy_tree, CopyEvent};
use crate::logs;
use crate::types::{RunReport, SurecpError};
use crate::Config;

/// Run the verified copy operation
///
/// Validates the configuration, walks the tree, and always finishes by
/// printing the summary block and appending it to the summary log - a fatal
/// abort still summarizes whatever counts had accumulated before the error
/// is handed back to the caller.
pub fn run(config: Config) -> Result<RunReport, SurecpError> {
    let mut report = RunReport::new();

    let print_event = |event: &CopyEvent| println!("{}", event);
    let result = config
        .validate()
        .and_then(|()| copy_tree(&config, &mut report, Some(&print_event)));

    print!("{}", logs::format_summary(&report));
    if let Err(err) = logs::append_summary(&config.summary_log, &report) {
        eprintln!("Cannot write in log: {}", err);
    }

    result.map(|()| report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn config_for(work: &TempDir, source: PathBuf, destination: PathBuf) -> Config {
        Config {
            source,
            destination,
            summary_log: work.path().join("Log.txt"),
            failure_log: work.path().join("FailedCopyLog.txt"),
        }
    }

    #[test]
    fn test_run_copies_and_appends_summary() {
        let work = TempDir::new().expect("create tempdir");
        let src = work.path().join("src");
        fs::create_dir_all(&src).expect("create source");
        fs::write(src.join("a.txt"), b"hello").expect("write source file");

        let config = config_for(&work, src, work.path().join("dst"));
        let report = run(config.clone()).expect("run should succeed");

        assert_eq!(report.copied_files, 1);
        let log = fs::read_to_string(&config.summary_log).expect("read summary log");
        assert!(log.contains("Successfully copied files: 1"));
        assert!(log.contains("Failed to copy files: 0"));
    }

    #[test]
    fn test_run_with_missing_source_still_logs_summary() {
        let work = TempDir::new().expect("create tempdir");
        let config = config_for(
            &work,
            work.path().join("no-such-dir"),
            work.path().join("dst"),
        );

        let err = run(config.clone()).unwrap_err();
        assert!(err.is_config_error());

        // Zero counts, but the run still leaves a summary entry behind
        let log = fs::read_to_string(&config.summary_log).expect("read summary log");
        assert!(log.contains("Already existent files: 0"));
        assert!(log.contains("Successfully copied files: 0"));
    }

    #[test]
    fn test_repeated_runs_accumulate_log_history() {
        let work = TempDir::new().expect("create tempdir");
        let src = work.path().join("src");
        fs::create_dir_all(&src).expect("create source");
        fs::write(src.join("a.txt"), b"hello").expect("write source file");

        let config = config_for(&work, src, work.path().join("dst"));
        run(config.clone()).expect("first run");
        run(config.clone()).expect("second run");

        let log = fs::read_to_string(&config.summary_log).expect("read summary log");
        assert_eq!(log.matches(&"=".repeat(66)).count(), 2);
        assert!(log.contains("Successfully copied files: 1"));
        assert!(log.contains("Already existent files: 1"));
    }
}
