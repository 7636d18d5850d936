//! The build mirror: a wipe-and-rebuild copy of source ∪ resources.
//!
//! ## Sync protocol
//!
//! 1. Delete every entry under the mirror root; the root itself survives.
//! 2. Copy each source file to its relative path (`fs::copy` keeps the
//!    permission bits).
//! 3. Overlay resource files likewise, removing any pre-existing entry at the
//!    destination first so renamed or removed resources leave no residue. A
//!    file squatting on a needed directory path is removed the same way.
//!
//! The mirror is never patched incrementally. An I/O failure mid-sync can
//! leave it half-built; the next staleness check reads that as a mismatch and
//! the following sync rebuilds from scratch.

use std::path::{Path, PathBuf};

use crate::error::{io_err, CacheError};
use crate::snapshot::{RootKind, Snapshot};

/// A mirror directory, exclusively owned by this crate.
///
/// Nothing outside [`Mirror::sync`] may write beneath the root.
#[derive(Debug, Clone)]
pub struct Mirror {
    root: PathBuf,
}

impl Mirror {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Snapshot of the mirror's current contents.
    ///
    /// A mirror that has never been synced yields an empty snapshot, which a
    /// staleness check against any non-empty source reads as stale.
    pub fn snapshot(&self) -> Result<Snapshot, CacheError> {
        Snapshot::of_dir(&self.root, RootKind::Optional)
    }

    /// Force the mirror's contents to exactly equal source ∪ resources.
    ///
    /// The source root is required; a missing resources root is skipped. On
    /// success the mirror's snapshot is set-equal to
    /// [`desired_snapshot`](crate::snapshot::desired_snapshot) of the same
    /// roots.
    pub fn sync(&self, source_root: &Path, resources_root: &Path) -> Result<(), CacheError> {
        std::fs::create_dir_all(&self.root).map_err(|e| io_err(&self.root, e))?;
        clear_children(&self.root)?;

        let mut copied = copy_tree(source_root, source_root, &self.root)?;
        if resources_root.exists() {
            copied += copy_tree(resources_root, resources_root, &self.root)?;
        }
        tracing::debug!("mirror synced: {} file(s) into {}", copied, self.root.display());
        Ok(())
    }
}

/// Remove every entry directly under `root`, leaving `root` in place.
fn clear_children(root: &Path) -> Result<(), CacheError> {
    for entry in std::fs::read_dir(root).map_err(|e| io_err(root, e))? {
        let entry = entry.map_err(|e| io_err(root, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| io_err(&path, e))?;
        if file_type.is_dir() {
            std::fs::remove_dir_all(&path).map_err(|e| io_err(&path, e))?;
        } else {
            std::fs::remove_file(&path).map_err(|e| io_err(&path, e))?;
        }
    }
    Ok(())
}

/// Copy every file under `dir` to its `from`-relative path beneath `to`.
///
/// A pre-existing entry at a destination (file or subtree) is removed before
/// the copy, which is what lets resources override source files.
fn copy_tree(from: &Path, dir: &Path, to: &Path) -> Result<usize, CacheError> {
    let mut copied = 0;
    for entry in std::fs::read_dir(dir).map_err(|e| io_err(dir, e))? {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| io_err(&path, e))?;
        if file_type.is_dir() {
            copied += copy_tree(from, &path, to)?;
            continue;
        }

        let relative = path.strip_prefix(from).unwrap_or(&path);
        let dest = to.join(relative);
        remove_existing(&dest)?;
        if let Some(parent) = dest.parent() {
            ensure_dir(to, parent)?;
        }
        std::fs::copy(&path, &dest).map_err(|e| io_err(&dest, e))?;
        copied += 1;
    }
    Ok(copied)
}

fn remove_existing(dest: &Path) -> Result<(), CacheError> {
    match std::fs::symlink_metadata(dest) {
        Ok(meta) if meta.is_dir() => {
            std::fs::remove_dir_all(dest).map_err(|e| io_err(dest, e))
        }
        Ok(_) => std::fs::remove_file(dest).map_err(|e| io_err(dest, e)),
        Err(_) => Ok(()),
    }
}

/// Create `parent` beneath `root`, removing any non-directory entry squatting
/// on the way down (a source file and a resource directory can share a name).
fn ensure_dir(root: &Path, parent: &Path) -> Result<(), CacheError> {
    if let Ok(relative) = parent.strip_prefix(root) {
        let mut dir = root.to_path_buf();
        for component in relative.components() {
            dir.push(component);
            if let Ok(meta) = std::fs::symlink_metadata(&dir) {
                if !meta.is_dir() {
                    std::fs::remove_file(&dir).map_err(|e| io_err(&dir, e))?;
                }
            }
        }
    }
    std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
