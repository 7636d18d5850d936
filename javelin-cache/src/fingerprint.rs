//! Content fingerprinting for change detection.
//!
//! SHA-256 is chosen for accidental-collision resistance, not security;
//! the digest only ever answers "did this file's bytes change".

use std::fmt;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{io_err, CacheError};

/// Hex-encoded SHA-256 digest of one file's full byte content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Lowercase hex digest, 64 characters.
    pub fn as_hex(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Fingerprint `path` by streaming its bytes through the digest.
///
/// Reads in fixed 8 KiB chunks, so arbitrarily large files never get
/// buffered whole. Identical bytes always produce the identical fingerprint.
pub fn fingerprint_file(path: &Path) -> Result<Fingerprint, CacheError> {
    let mut file = std::fs::File::open(path).map_err(|e| io_err(path, e))?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 8192];
    loop {
        let n = file.read(&mut buf).map_err(|e| io_err(path, e))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(Fingerprint(hex::encode(hasher.finalize())))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn identical_content_yields_identical_fingerprint() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.java");
        let b = tmp.path().join("b.java");
        std::fs::write(&a, "class A {}").unwrap();
        std::fs::write(&b, "class A {}").unwrap();
        assert_eq!(fingerprint_file(&a).unwrap(), fingerprint_file(&b).unwrap());
    }

    #[test]
    fn one_byte_change_yields_different_fingerprint() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a.java");
        std::fs::write(&path, "class A {}").unwrap();
        let before = fingerprint_file(&path).unwrap();
        std::fs::write(&path, "class B {}").unwrap();
        let after = fingerprint_file(&path).unwrap();
        assert_ne!(before, after);
    }

    #[test]
    fn fingerprint_is_sha256_hex() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty");
        std::fs::write(&path, b"").unwrap();
        let fp = fingerprint_file(&path).unwrap();
        // SHA-256 of the empty input.
        assert_eq!(
            fp.as_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn streams_files_larger_than_one_chunk() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("big.bin");
        let content = vec![0xAB_u8; 3 * 8192 + 17];
        std::fs::write(&path, &content).unwrap();

        let streamed = fingerprint_file(&path).unwrap();
        let whole = {
            let mut h = Sha256::new();
            h.update(&content);
            hex::encode(h.finalize())
        };
        assert_eq!(streamed.as_hex(), whole);
    }

    #[test]
    fn missing_file_reports_path_in_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("absent.java");
        let err = fingerprint_file(&path).unwrap_err();
        assert!(err.to_string().contains("absent.java"), "got: {err}");
    }
}
