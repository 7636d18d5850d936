//! Error types for javelin-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from manifest operations.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Underlying I/O failure (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML serialization error (write/save path).
    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// TOML parse error on load; includes file path and line context from toml.
    #[error("failed to parse manifest at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The manifest file did not exist at the expected path.
    #[error("manifest not found at {path} (run `javelin init` first)")]
    ManifestNotFound { path: PathBuf },

    /// `javelin init` on a directory that already carries a manifest.
    #[error("project already initialized: {path} exists")]
    AlreadyInitialized { path: PathBuf },
}
