//! Hashing utilities

use crate::types::SurecpError;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Content fingerprint of a file.
///
/// Two files are content-equal iff their digests compare equal. Comparison is
/// full-value equality of all 32 bytes, never a prefix. The lowercase-hex
/// rendering exists for logs and diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digest([u8; 32]);

impl Digest {
    /// Raw digest bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hexadecimal rendering of the full digest
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Compute the BLAKE3 digest of a file
///
/// The file is streamed in 64KB chunks, so arbitrarily large files hash in
/// constant memory. The digest depends only on the file bytes, never on
/// metadata.
///
/// # Arguments
/// * `file_path` - Path to the file to hash
///
/// # Returns
/// * `Ok(Digest)` - 32-byte BLAKE3 digest
/// * `Err(SurecpError::Digest)` - the file could not be opened or read
pub fn compute_digest(file_path: &Path) -> Result<Digest, SurecpError> {
    let digest_err = |source: std::io::Error| SurecpError::Digest {
        path: file_path.to_path_buf(),
        source,
    };

    let mut file = File::open(file_path).map_err(digest_err)?;
    let mut hasher = blake3::Hasher::new();
    let mut buffer = vec![0u8; 64 * 1024];

    loop {
        let bytes_read = file.read(&mut buffer).map_err(digest_err)?;

        if bytes_read == 0 {
            break; // EOF
        }

        hasher.update(&buffer[0..bytes_read]);
    }

    Ok(Digest(*hasher.finalize().as_bytes()))
}
