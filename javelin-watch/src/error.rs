//! Error types for javelin-watch.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from the supervisor and the watch runtime.
#[derive(Debug, Error)]
pub enum WatchError {
    /// The child executable could not be launched.
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// `start` was called while a child is still owned; `restart` is the
    /// only way to replace a running child.
    #[error("a child process is already running; use restart")]
    AlreadyRunning,

    /// Terminating the child failed for a reason other than it having
    /// already exited.
    #[error("could not terminate child process: {0}")]
    Termination(#[source] std::io::Error),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`WatchError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> WatchError {
    WatchError::Io {
        path: path.into(),
        source,
    }
}
