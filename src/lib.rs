//! # surecp - Verified Directory Copy
//!
//! Copy a directory tree and trust the result.
//!
//! surecp recursively copies a source tree to a destination, skipping files
//! whose content already matches (by BLAKE3 digest), verifying every copy by
//! re-hashing the destination, and retrying a failed copy once before
//! recording it as failed. Every run ends with a summary that is printed and
//! appended to a persistent log.

// Module declarations
pub mod commands;
pub mod config;
pub mod copier;
pub mod hash;
pub mod logs;
pub mod scanner;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use types::{FileTask, RunReport, SurecpError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
