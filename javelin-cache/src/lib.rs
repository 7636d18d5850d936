//! # javelin-cache
//!
//! Content-addressed staleness detection and the build mirror.
//!
//! Take a [`snapshot::desired_snapshot`] of source ∪ resources, compare it to
//! [`Mirror::snapshot`] with [`staleness::is_up_to_date`], and call
//! [`Mirror::sync`] to force the mirror back into exact correspondence.
//! Snapshots are always recomputed from disk; only the mirror persists
//! between checks.

pub mod error;
pub mod fingerprint;
pub mod mirror;
pub mod snapshot;
pub mod staleness;

pub use error::CacheError;
pub use fingerprint::{fingerprint_file, Fingerprint};
pub use mirror::Mirror;
pub use snapshot::{desired_snapshot, RootKind, Snapshot};
pub use staleness::{divergence, is_up_to_date, Divergence};
