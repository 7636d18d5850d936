//! Child process lifecycle.
//!
//! The supervisor owns at most one live child at a time. Termination is
//! graceful-then-forceful: an interrupt signal first, a bounded grace window
//! for the child to exit on its own, then a forced kill. A child that has
//! already exited is never an error to stop.
//!
//! State machine: `NotStarted --start--> Running --stop--> Terminated`,
//! with `stop` on a terminated (or never-started) supervisor a no-op.

use std::time::Duration;

use tokio::process::Child;
use tokio::time::Instant;

use crate::error::WatchError;
use crate::toolchain::LaunchSpec;

/// How long a child gets to exit after the interrupt before the forced kill.
const GRACE_WINDOW: Duration = Duration::from_millis(500);
const GRACE_POLL: Duration = Duration::from_millis(50);

/// Where the supervisor sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupervisorState {
    NotStarted,
    Running,
    Terminated,
}

/// Owns the lifecycle of at most one spawned child process.
#[derive(Debug)]
pub struct Supervisor {
    child: Option<Child>,
    state: SupervisorState,
}

impl Supervisor {
    pub fn new() -> Self {
        Self {
            child: None,
            state: SupervisorState::NotStarted,
        }
    }

    pub fn state(&self) -> SupervisorState {
        self.state
    }

    /// OS pid of the current child, if one is running and not yet reaped.
    pub fn pid(&self) -> Option<u32> {
        self.child.as_ref().and_then(|child| child.id())
    }

    /// Spawn the child described by `spec`, inheriting stdout and stderr.
    ///
    /// Fails with [`WatchError::AlreadyRunning`] if a child is still owned;
    /// replacing a running child goes through [`restart`](Self::restart).
    pub fn start(&mut self, spec: &LaunchSpec) -> Result<(), WatchError> {
        if self.child.is_some() {
            return Err(WatchError::AlreadyRunning);
        }

        let mut command = spec.to_command();
        command.kill_on_drop(true);
        let child = command.spawn().map_err(|source| WatchError::Spawn {
            program: spec.program.clone(),
            source,
        })?;

        tracing::info!(
            pid = child.id().unwrap_or_default(),
            program = %spec.program,
            "child started",
        );
        self.child = Some(child);
        self.state = SupervisorState::Running;
        Ok(())
    }

    /// Terminate the current child, if any.
    ///
    /// Interrupt first; "already exited" counts as success. A child that
    /// survives the grace window, or an interrupt that fails for any other
    /// reason, gets a forced kill. Idempotent: with no live child this is a
    /// no-op.
    pub async fn stop(&mut self) -> Result<(), WatchError> {
        let Some(mut child) = self.child.take() else {
            return Ok(());
        };
        self.state = SupervisorState::Terminated;

        // The child may have exited on its own since the last look.
        if let Some(status) = child.try_wait().map_err(WatchError::Termination)? {
            tracing::debug!(%status, "child had already exited");
            return Ok(());
        }

        match send_interrupt(&child) {
            Interrupt::Sent => {
                let deadline = Instant::now() + GRACE_WINDOW;
                loop {
                    if let Some(status) = child.try_wait().map_err(WatchError::Termination)? {
                        tracing::debug!(%status, "child exited after interrupt");
                        return Ok(());
                    }
                    if Instant::now() >= deadline {
                        break;
                    }
                    tokio::time::sleep(GRACE_POLL).await;
                }
                tracing::warn!("child ignored interrupt, forcing kill");
            }
            Interrupt::AlreadyExited => {
                let status = child.wait().await.map_err(WatchError::Termination)?;
                tracing::debug!(%status, "child had already exited");
                return Ok(());
            }
            Interrupt::Failed(err) => {
                tracing::warn!(error = %err, "interrupt failed, forcing kill");
            }
        }

        child.kill().await.map_err(WatchError::Termination)?;
        tracing::debug!("child killed");
        Ok(())
    }

    /// Stop the current child (if any), then start a new one from `spec`.
    /// The only sanctioned way to replace a running child.
    ///
    /// A termination failure is logged and does not block the new spawn; the
    /// old handle is gone either way.
    pub async fn restart(&mut self, spec: &LaunchSpec) -> Result<(), WatchError> {
        if let Err(err) = self.stop().await {
            tracing::warn!(error = %err, "could not confirm old child terminated");
        }
        self.start(spec)
    }
}

impl Default for Supervisor {
    fn default() -> Self {
        Self::new()
    }
}

enum Interrupt {
    Sent,
    AlreadyExited,
    Failed(std::io::Error),
}

#[cfg(unix)]
fn send_interrupt(child: &Child) -> Interrupt {
    use nix::errno::Errno;
    use nix::sys::signal::{kill, Signal};
    use nix::unistd::Pid;

    // id() is None once the child has been reaped.
    let Some(pid) = child.id() else {
        return Interrupt::AlreadyExited;
    };
    match kill(Pid::from_raw(pid as i32), Signal::SIGINT) {
        Ok(()) => Interrupt::Sent,
        Err(Errno::ESRCH) => Interrupt::AlreadyExited,
        Err(errno) => Interrupt::Failed(std::io::Error::from(errno)),
    }
}

#[cfg(not(unix))]
fn send_interrupt(_child: &Child) -> Interrupt {
    Interrupt::Failed(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "no interrupt signal on this platform",
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
