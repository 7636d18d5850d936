//! Tree snapshots: root-relative path → fingerprint maps.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{io_err, CacheError};
use crate::fingerprint::{fingerprint_file, Fingerprint};

/// Whether a snapshot root is allowed to be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootKind {
    /// A missing root is an I/O error (the source tree).
    Required,
    /// A missing root yields an empty snapshot (a resources tree).
    Optional,
}

/// Mapping from root-relative, forward-slash-normalized path to [`Fingerprint`].
///
/// Keys never include the root itself. Separators are normalized to `/` so
/// snapshots compare structurally regardless of platform. Iteration order is
/// stable (BTreeMap) but nothing may depend on it; comparisons are
/// structural-equality only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    files: BTreeMap<String, Fingerprint>,
}

impl Snapshot {
    /// A snapshot with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Walk `root` recursively and fingerprint every regular file beneath it.
    ///
    /// Directory entries themselves contribute nothing; empty directories are
    /// invisible to a snapshot. A missing root is handled per `kind`.
    pub fn of_dir(root: &Path, kind: RootKind) -> Result<Self, CacheError> {
        if !root.exists() {
            return match kind {
                RootKind::Optional => Ok(Self::empty()),
                RootKind::Required => Err(io_err(
                    root,
                    std::io::Error::new(ErrorKind::NotFound, "snapshot root does not exist"),
                )),
            };
        }
        let mut files = BTreeMap::new();
        walk(root, root, &mut files)?;
        Ok(Self { files })
    }

    /// Key union of `self` and `overlay`; on a collision the `overlay`
    /// entry wins.
    ///
    /// Used to combine source + resources into one desired snapshot. The
    /// precedence matches mirror sync order, which copies sources first and
    /// resources over them.
    pub fn merged_with(mut self, overlay: Snapshot) -> Snapshot {
        for (key, fingerprint) in overlay.files {
            if self.files.insert(key.clone(), fingerprint).is_some() {
                tracing::debug!("snapshot merge: resources entry overrides {key}");
            }
        }
        self
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Fingerprint> {
        self.files.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.files.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Fingerprint)> {
        self.files.iter()
    }
}

/// Desired state for staleness checks: source ∪ resources.
///
/// The source root is required; the resources root is optional and overrides
/// source entries on key collision.
pub fn desired_snapshot(source_root: &Path, resources_root: &Path) -> Result<Snapshot, CacheError> {
    let source = Snapshot::of_dir(source_root, RootKind::Required)?;
    let resources = Snapshot::of_dir(resources_root, RootKind::Optional)?;
    Ok(source.merged_with(resources))
}

fn walk(
    root: &Path,
    dir: &Path,
    files: &mut BTreeMap<String, Fingerprint>,
) -> Result<(), CacheError> {
    for entry in std::fs::read_dir(dir).map_err(|e| io_err(dir, e))? {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| io_err(&path, e))?;
        if file_type.is_dir() {
            walk(root, &path, files)?;
        } else {
            let fingerprint = fingerprint_file(&path)?;
            files.insert(relative_key(root, &path), fingerprint);
        }
    }
    Ok(())
}

/// Root-relative path with `/` separators, regardless of platform.
fn relative_key(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    parts.join("/")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
