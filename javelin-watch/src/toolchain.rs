//! Pluggable build/launch abstraction.
//!
//! The watch runtime does not know how to compile anything; it only knows
//! when the mirror went stale. Rebuilding and describing the run command are
//! delegated through [`Toolchain`] so the loop stays decoupled from any
//! particular compiler.
//!
//! Production code implements `Toolchain` over the real JDK tools; tests can
//! provide their own implementation that doesn't spawn real processes.

use std::ffi::OsString;

use tokio::process::Command;

/// A fully-resolved child invocation: program name plus argument list.
/// The spawned process inherits the supervisor's stdout and stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    pub program: String,
    pub args: Vec<OsString>,
}

impl LaunchSpec {
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = OsString>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().collect(),
        }
    }

    pub(crate) fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

/// Trait abstracting how the watched project is rebuilt and launched.
pub trait Toolchain {
    /// Recompile the project from its current sources. Any failure means
    /// "skip restart this cycle"; the loop retries on the next change.
    fn rebuild(&self) -> anyhow::Result<()>;

    /// Describe the command that runs the project. Called fresh on every
    /// reload cycle, so a changed entry point takes effect on restart.
    fn launch(&self) -> anyhow::Result<LaunchSpec>;
}
