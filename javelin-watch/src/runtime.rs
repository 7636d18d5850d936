//! The polling watch loop.
//!
//! Single-threaded and cooperative: every tick recomputes fresh snapshots,
//! compares them against the mirror, and on a mismatch runs one full reload
//! cycle (mirror sync, rebuild, restart) before the next sleep. Exactly one
//! cycle is ever in flight, so nothing else may write into the mirror while
//! the loop runs. A failed step logs and skips the rest of its cycle; the
//! loop itself keeps polling.

use std::path::PathBuf;
use std::time::Duration;

use tokio::time::MissedTickBehavior;

use javelin_cache::{desired_snapshot, is_up_to_date, Mirror};

use crate::error::{io_err, WatchError};
use crate::supervisor::Supervisor;
use crate::toolchain::Toolchain;

const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Directories one watch session operates over. The mirror directory is
/// exclusively owned by the session for its whole lifetime.
#[derive(Debug, Clone)]
pub struct WatchPaths {
    pub source_dir: PathBuf,
    pub resources_dir: PathBuf,
    pub mirror_dir: PathBuf,
}

/// Start the watch runtime and block the current thread until ctrl-c.
pub fn start_blocking<T: Toolchain>(paths: WatchPaths, toolchain: T) -> Result<(), WatchError> {
    init_tracing();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| io_err("tokio-runtime", e))?;
    runtime.block_on(run(paths, toolchain))
}

/// Run the watch loop: one bootstrap cycle, then poll once per second until
/// ctrl-c, stopping the supervised child on the way out.
pub async fn run<T: Toolchain>(paths: WatchPaths, toolchain: T) -> Result<(), WatchError> {
    let mut supervisor = Supervisor::new();
    bootstrap(&paths, &toolchain, &mut supervisor).await;

    let mut interval = tokio::time::interval(POLL_INTERVAL);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    interval.tick().await; // consume the first immediate tick

    // Registered once so a ctrl-c arriving mid-cycle is still picked up.
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let outcome = loop {
        tokio::select! {
            signal = &mut ctrl_c => {
                break match signal {
                    Ok(()) => {
                        tracing::info!("received ctrl-c, shutting down watch");
                        Ok(())
                    }
                    Err(err) => Err(io_err("ctrl-c handler", err)),
                };
            }
            _ = interval.tick() => {
                let _ = tick(&paths, &toolchain, &mut supervisor).await;
            }
        }
    };

    if let Err(err) = supervisor.stop().await {
        tracing::warn!(error = %err, "could not stop child during shutdown");
    }
    outcome
}

/// One-time cycle before polling starts: bring the mirror and build output
/// up to date if needed, then launch the child. Failures are logged and
/// leave the child unstarted; the loop retries the whole cycle once the
/// next change is detected.
async fn bootstrap<T: Toolchain>(paths: &WatchPaths, toolchain: &T, supervisor: &mut Supervisor) {
    let desired = match desired_snapshot(&paths.source_dir, &paths.resources_dir) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            tracing::error!(error = %err, "initial snapshot failed");
            return;
        }
    };
    let mirror = Mirror::new(&paths.mirror_dir);
    let actual = match mirror.snapshot() {
        Ok(snapshot) => snapshot,
        Err(err) => {
            tracing::error!(error = %err, "initial mirror snapshot failed");
            return;
        }
    };

    if !is_up_to_date(&desired, &actual) {
        if let Err(err) = mirror.sync(&paths.source_dir, &paths.resources_dir) {
            tracing::error!(error = %err, "initial mirror sync failed");
            return;
        }
        if let Err(err) = toolchain.rebuild() {
            tracing::error!(error = %err, "initial build failed");
            return;
        }
    }

    let spec = match toolchain.launch() {
        Ok(spec) => spec,
        Err(err) => {
            tracing::error!(error = %err, "launch command unavailable");
            return;
        }
    };
    if let Err(err) = supervisor.start(&spec) {
        tracing::error!(error = %err, "could not start child");
    }
}

/// What one polling cycle did. Only [`Reloaded`](TickOutcome::Reloaded)
/// touches the supervised child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TickOutcome {
    UpToDate,
    Reloaded,
    SnapshotFailed,
    SyncFailed,
    RebuildFailed,
    RestartFailed,
}

async fn tick<T: Toolchain>(
    paths: &WatchPaths,
    toolchain: &T,
    supervisor: &mut Supervisor,
) -> TickOutcome {
    let desired = match desired_snapshot(&paths.source_dir, &paths.resources_dir) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            tracing::error!(error = %err, "snapshot failed, skipping cycle");
            return TickOutcome::SnapshotFailed;
        }
    };
    let mirror = Mirror::new(&paths.mirror_dir);
    let actual = match mirror.snapshot() {
        Ok(snapshot) => snapshot,
        Err(err) => {
            tracing::error!(error = %err, "mirror snapshot failed, skipping cycle");
            return TickOutcome::SnapshotFailed;
        }
    };
    if is_up_to_date(&desired, &actual) {
        return TickOutcome::UpToDate;
    }

    tracing::info!("file changes found, reloading");
    if let Err(err) = mirror.sync(&paths.source_dir, &paths.resources_dir) {
        tracing::error!(error = %err, "mirror sync failed, skipping cycle");
        return TickOutcome::SyncFailed;
    }
    if let Err(err) = toolchain.rebuild() {
        tracing::error!(error = %err, "rebuild failed, keeping previous child");
        return TickOutcome::RebuildFailed;
    }
    let spec = match toolchain.launch() {
        Ok(spec) => spec,
        Err(err) => {
            tracing::error!(error = %err, "launch command unavailable");
            return TickOutcome::RestartFailed;
        }
    };
    if let Err(err) = supervisor.restart(&spec).await {
        tracing::error!(error = %err, "restart failed, will retry on next change");
        return TickOutcome::RestartFailed;
    }
    TickOutcome::Reloaded
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
