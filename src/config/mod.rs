//! Configuration management

use crate::types::SurecpError;
use clap::Parser;
use std::path::PathBuf;

/// Command-line interface for surecp
#[derive(Debug, Parser)]
#[command(
    name = "surecp",
    version,
    about = "Verified recursive directory copy",
    long_about = "Recursively copies a directory tree, skipping files whose content \
                  already matches by digest and re-verifying every copy."
)]
pub struct Cli {
    /// Source directory to copy from
    pub source: PathBuf,

    /// Destination directory to copy into (created as needed)
    pub destination: PathBuf,
}

/// Global configuration for surecp
#[derive(Debug, Clone)]
pub struct Config {
    /// Source directory
    pub source: PathBuf,

    /// Destination directory
    pub destination: PathBuf,

    /// Where the end-of-run summary block is appended
    pub summary_log: PathBuf,

    /// Where exhausted-retry failures are appended
    pub failure_log: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::new(),
            destination: PathBuf::new(),
            summary_log: PathBuf::from("Log.txt"),
            failure_log: PathBuf::from("FailedCopyLog.txt"),
        }
    }
}

impl Config {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), SurecpError> {
        if !self.source.exists() {
            return Err(SurecpError::Config(format!(
                "Source path does not exist: {:?}",
                self.source
            )));
        }

        if !self.source.is_dir() {
            return Err(SurecpError::Config(format!(
                "Source path is not a directory: {:?}",
                self.source
            )));
        }

        if self.source == self.destination {
            return Err(SurecpError::Config(
                "Source and destination cannot be the same".to_string(),
            ));
        }

        Ok(())
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            source: cli.source,
            destination: cli.destination,
            ..Self::default()
        }
    }
}
