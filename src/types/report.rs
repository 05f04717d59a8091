//! Per-run outcome counters

/// Aggregate outcome counters for one copy run.
///
/// Owned by the run invocation, never shared across runs. Each regular file
/// visited during the walk increments exactly one counter, so after a
/// completed run `existent_files + copied_files + failed_files` equals the
/// number of regular files visited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Files whose destination already matched by content digest
    pub existent_files: u64,
    /// Files copied and verified successfully
    pub copied_files: u64,
    /// Files that exhausted the retry budget
    pub failed_files: u64,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file that was already present with matching content
    pub fn record_existent(&mut self) {
        self.existent_files += 1;
    }

    /// Record a successfully copied and verified file
    pub fn record_copied(&mut self) {
        self.copied_files += 1;
    }

    /// Record a file that failed verification on every attempt
    pub fn record_failed(&mut self) {
        self.failed_files += 1;
    }

    /// Total regular files visited during the run
    pub fn total_visited(&self) -> u64 {
        self.existent_files + self.copied_files + self.failed_files
    }
}
