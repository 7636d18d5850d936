//! Error types for javelin-cache.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from snapshot and mirror operations.
#[derive(Debug, Error)]
pub enum CacheError {
    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`CacheError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> CacheError {
    CacheError::Io {
        path: path.into(),
        source,
    }
}
