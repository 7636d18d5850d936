//! Error types for javelin-fetch.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from dependency resolution and download.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed (transport error or non-success status).
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    /// The response arrived but its body could not be read or decoded.
    #[error("could not read response from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A Maven coordinate that does not follow the purl shape.
    #[error("invalid Maven coordinate `{input}` (expected pkg:maven/<group>/<artifact>@<version>)")]
    InvalidCoordinate { input: String },

    /// A GitHub reference that names neither `owner/repo` nor a repo URL.
    #[error("invalid GitHub reference `{input}` (expected <owner>/<repo> or a github.com URL)")]
    InvalidRepo { input: String },

    /// The latest release exists but carries no jar asset.
    #[error("latest release of {repo} has no jar asset")]
    NoJarAsset { repo: String },
}

/// Convenience constructor for [`FetchError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> FetchError {
    FetchError::Io {
        path: path.into(),
        source,
    }
}

/// Convenience constructor for [`FetchError::Http`].
pub(crate) fn http_err(url: impl Into<String>, source: ureq::Error) -> FetchError {
    FetchError::Http {
        url: url.into(),
        source: Box::new(source),
    }
}
