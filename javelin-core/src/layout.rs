//! Project directory layout.
//!
//! ```text
//! <project root>/
//!   javelin.toml      (manifest)
//!   src/              (Java sources)
//!   resources/        (optional; overlaid onto the build mirror and classes)
//!   lib/              (third-party jars)
//!   .javelin/
//!     bin/            (compiled classes + copied resources)
//!     cache/          (build mirror of src ∪ resources)
//!     build/          (packaged jars)
//! ```
//!
//! Every component receives a [`Layout`] explicitly; there is no process-wide
//! default project root.

use std::path::PathBuf;

/// Java source tree, relative to the project root.
pub const SOURCE_DIR: &str = "src";
/// Optional resource tree, relative to the project root.
pub const RESOURCES_DIR: &str = "resources";
/// Third-party jar directory, relative to the project root.
pub const LIB_DIR: &str = "lib";
/// Tool-owned working directory, relative to the project root.
pub const WORK_DIR: &str = ".javelin";

/// Resolved directory paths for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Project root (the directory holding `javelin.toml`).
    pub root: PathBuf,
    /// `<root>/src`
    pub source_dir: PathBuf,
    /// `<root>/resources`
    pub resources_dir: PathBuf,
    /// `<root>/lib`
    pub lib_dir: PathBuf,
    /// `<root>/.javelin/bin`: javac output, also the launch classpath root.
    pub classes_dir: PathBuf,
    /// `<root>/.javelin/cache`: the build mirror, owned exclusively by javelin-cache.
    pub mirror_dir: PathBuf,
    /// `<root>/.javelin/build`: packaged jar output.
    pub build_dir: PathBuf,
}

impl Layout {
    /// Derive every project path from `root`. Pure; creates nothing on disk.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let work = root.join(WORK_DIR);
        Self {
            source_dir: root.join(SOURCE_DIR),
            resources_dir: root.join(RESOURCES_DIR),
            lib_dir: root.join(LIB_DIR),
            classes_dir: work.join("bin"),
            mirror_dir: work.join("cache"),
            build_dir: work.join("build"),
            root,
        }
    }

    /// `Layout::at` rooted at the current working directory.
    pub fn current() -> std::io::Result<Self> {
        Ok(Self::at(std::env::current_dir()?))
    }

    /// `<root>/.javelin`
    pub fn work_dir(&self) -> PathBuf {
        self.root.join(WORK_DIR)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
