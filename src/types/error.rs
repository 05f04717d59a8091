//! Error types for surecp

use std::path::PathBuf;
use thiserror::Error;

/// Error types for surecp operations
///
/// Every variant is fatal for the whole run: an unreadable file, an
/// unwritable destination, or a failure inside the hashing layer means the
/// filesystem cannot be trusted for the remaining files. A digest mismatch
/// after a copy is NOT an error - it is handled locally by the retry loop in
/// [`crate::copier`].
#[derive(Debug, Error)]
pub enum SurecpError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error raised while traversing the source tree
    #[error("walk error: {0}")]
    Walk(#[from] ignore::Error),

    /// Read failure inside the hashing layer, kept distinct from plain IO so
    /// callers can see which stage gave up
    #[error("failed to hash {path}: {source}")]
    Digest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SurecpError {
    /// Check if this error came from the hashing layer
    pub fn is_digest_error(&self) -> bool {
        matches!(self, SurecpError::Digest { .. })
    }

    /// Check if this error is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, SurecpError::Config(_))
    }
}
