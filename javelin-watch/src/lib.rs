//! Watch mode for javelin projects.
//!
//! Polls the source and resource trees once per second, compares them
//! against the build mirror, and on a mismatch runs one reload cycle:
//! mirror sync, rebuild through the [`Toolchain`], then a
//! supervised restart of the application process. Rebuild failures never
//! kill the running child; the loop just waits for the next change.

pub mod error;
pub mod runtime;
pub mod supervisor;
pub mod toolchain;

pub use error::WatchError;
pub use runtime::{run, start_blocking, WatchPaths};
pub use supervisor::{Supervisor, SupervisorState};
pub use toolchain::{LaunchSpec, Toolchain};
