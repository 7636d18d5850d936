//! Staleness verdict between a desired and an actual snapshot.

use crate::snapshot::Snapshot;

/// True when `actual` matches `desired` exactly: same keys, same fingerprints.
///
/// The cardinality pre-check is load-bearing, not an optimization. The per-key
/// pass iterates only `desired`, so a file removed from `desired` but still in
/// `actual` would otherwise slip through as up-to-date; equal sizes plus every
/// desired key matching rules that out. Two empty snapshots are up-to-date.
pub fn is_up_to_date(desired: &Snapshot, actual: &Snapshot) -> bool {
    if desired.len() != actual.len() {
        return false;
    }
    desired
        .iter()
        .all(|(path, fingerprint)| actual.get(path) == Some(fingerprint))
}

/// Path-level breakdown of how `actual` diverges from `desired`.
///
/// Diagnostics only; the up-to-date verdict never depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Divergence {
    /// In `desired` but absent from `actual` (new or never mirrored).
    pub missing: Vec<String>,
    /// In `actual` but absent from `desired` (removed at the origin).
    pub orphaned: Vec<String>,
    /// In both, with differing fingerprints.
    pub modified: Vec<String>,
}

impl Divergence {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.orphaned.is_empty() && self.modified.is_empty()
    }

    /// Total number of diverging paths.
    pub fn len(&self) -> usize {
        self.missing.len() + self.orphaned.len() + self.modified.len()
    }
}

/// Compute the full divergence between two snapshots.
///
/// `divergence(d, a).is_empty()` agrees with [`is_up_to_date`]`(d, a)` for
/// every pair of snapshots.
pub fn divergence(desired: &Snapshot, actual: &Snapshot) -> Divergence {
    let mut result = Divergence::default();
    for (path, fingerprint) in desired.iter() {
        match actual.get(path) {
            None => result.missing.push(path.clone()),
            Some(other) if other != fingerprint => result.modified.push(path.clone()),
            Some(_) => {}
        }
    }
    for (path, _) in actual.iter() {
        if !desired.contains(path) {
            result.orphaned.push(path.clone());
        }
    }
    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
