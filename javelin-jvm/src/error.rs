//! Error types for javelin-jvm.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// All errors that can arise from JDK tool invocation.
#[derive(Debug, Error)]
pub enum JvmError {
    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The JDK tool itself could not be launched (usually: not on PATH).
    #[error("failed to run '{program}' (is a JDK installed and on PATH?): {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// javac ran and reported compilation errors.
    #[error("javac failed with {status}")]
    CompileFailed { status: ExitStatus },

    /// jar ran and failed to package the archive.
    #[error("jar failed with {status}")]
    PackageFailed { status: ExitStatus },

    /// The source tree holds no `.java` files at all.
    #[error("no .java sources found under {dir}")]
    NoSources { dir: PathBuf },

    /// A classpath entry contained the path-list separator or similar.
    #[error("invalid classpath entry: {0}")]
    Classpath(#[from] std::env::JoinPathsError),
}

/// Convenience constructor for [`JvmError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> JvmError {
    JvmError::Io {
        path: path.into(),
        source,
    }
}
