//! MD5 checksum utilities
//!
//! Mod manifests record file digests as bare 32-character uppercase hex
//! strings. Every digest produced here uses that format.

use md5::{Digest, Md5};

use crate::{NormalizedPath, Result, io};

/// Length of a hex-rendered MD5 digest
pub const MD5_HEX_LEN: usize = 32;

/// Compute the MD5 digest of raw bytes as uppercase hex.
pub fn compute_content_md5(content: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(content);
    format!("{:X}", hasher.finalize())
}

/// Compute the MD5 digest of a file's contents as uppercase hex.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn compute_file_md5(path: &NormalizedPath) -> Result<String> {
    let content = io::read_bytes(path)?;
    Ok(compute_content_md5(&content))
}
