//! `javelin.toml` manifest persistence and project scaffolding.
//!
//! # Storage layout
//!
//! ```text
//! <project root>/
//!   javelin.toml      (manifest: main class + dependency table)
//!   src/Main.java     (created by init)
//!   resources/        (created by init, empty)
//!   lib/              (created by init, empty)
//! ```
//!
//! # API pattern
//!
//! Every function has two forms:
//! - `fn_at(root: &Path, ...)`: explicit project root, used in tests with `TempDir`
//! - `fn(...)`: derives the root from the current working directory and delegates to `_at`
//!
//! Tests must NEVER call the no-arg wrappers; always use `_at`.

use std::path::{Path, PathBuf};

use crate::error::ManifestError;
use crate::layout::{LIB_DIR, RESOURCES_DIR, SOURCE_DIR, WORK_DIR};
use crate::types::{Dependency, MainClass, Manifest};

/// Manifest file name, relative to the project root.
pub const MANIFEST_FILE: &str = "javelin.toml";

const MAIN_JAVA: &str = "Main.java";
const MAIN_JAVA_TEMPLATE: &str = r#"public class Main {
    public static void main(String[] args) {
        System.out.println("Hello, World!");
    }
}
"#;

// ---------------------------------------------------------------------------
// 1. Path helpers
// ---------------------------------------------------------------------------

/// `<root>/javelin.toml`. Pure, no I/O.
pub fn manifest_path_at(root: &Path) -> PathBuf {
    root.join(MANIFEST_FILE)
}

/// True if `root` carries a manifest file.
pub fn exists_at(root: &Path) -> bool {
    manifest_path_at(root).is_file()
}

// ---------------------------------------------------------------------------
// 2. Load
// ---------------------------------------------------------------------------

/// Load the manifest from `<root>/javelin.toml`.
///
/// Returns `ManifestError::ManifestNotFound` if absent,
/// `ManifestError::Parse` (with path + line context) if malformed TOML.
pub fn load_at(root: &Path) -> Result<Manifest, ManifestError> {
    let path = manifest_path_at(root);
    if !path.exists() {
        return Err(ManifestError::ManifestNotFound { path });
    }
    let contents = std::fs::read_to_string(&path)?;
    toml::from_str(&contents).map_err(|e| ManifestError::Parse { path, source: e })
}

/// `load_at` convenience wrapper rooted at the current working directory.
pub fn load() -> Result<Manifest, ManifestError> {
    load_at(&std::env::current_dir()?)
}

// ---------------------------------------------------------------------------
// 3. Save (atomic)
// ---------------------------------------------------------------------------

/// Atomically save the manifest to `<root>/javelin.toml`.
///
/// Write flow: serialize → `javelin.toml.tmp` sibling → `rename`.
/// `.tmp` is always in the same directory as the target (same filesystem, no EXDEV).
pub fn save_at(root: &Path, manifest: &Manifest) -> Result<(), ManifestError> {
    let path = manifest_path_at(root);
    let tmp_path = path.with_file_name(format!("{MANIFEST_FILE}.tmp"));

    let text = toml::to_string_pretty(manifest)?;
    std::fs::write(&tmp_path, text)?;
    std::fs::rename(&tmp_path, &path)?;
    Ok(())
}

/// `save_at` convenience wrapper rooted at the current working directory.
pub fn save(manifest: &Manifest) -> Result<(), ManifestError> {
    save_at(&std::env::current_dir()?, manifest)
}

// ---------------------------------------------------------------------------
// 4. Init (project scaffold)
// ---------------------------------------------------------------------------

/// Scaffold a new project under `root`: manifest, `src/Main.java` hello world,
/// empty `resources/` and `lib/`, and a `.gitignore` covering `.javelin/`.
///
/// Returns the paths created, in creation order, for reporting. Fails with
/// `ManifestError::AlreadyInitialized` if `root` already carries a manifest;
/// nothing else is touched in that case.
pub fn scaffold_at(root: &Path, main_class: &MainClass) -> Result<Vec<PathBuf>, ManifestError> {
    let manifest_path = manifest_path_at(root);
    if manifest_path.exists() {
        return Err(ManifestError::AlreadyInitialized { path: manifest_path });
    }

    let mut created = Vec::new();

    save_at(root, &Manifest::new(main_class.clone()))?;
    created.push(manifest_path);

    let source_dir = root.join(SOURCE_DIR);
    std::fs::create_dir_all(&source_dir)?;
    let main_java = source_dir.join(MAIN_JAVA);
    if !main_java.exists() {
        std::fs::write(&main_java, MAIN_JAVA_TEMPLATE)?;
        created.push(main_java);
    }

    for dir in [RESOURCES_DIR, LIB_DIR] {
        let path = root.join(dir);
        if !path.exists() {
            std::fs::create_dir_all(&path)?;
            created.push(path);
        }
    }

    let gitignore = root.join(".gitignore");
    if !gitignore.exists() {
        std::fs::write(&gitignore, format!("{WORK_DIR}/\n"))?;
        created.push(gitignore);
    }

    Ok(created)
}

/// `scaffold_at` convenience wrapper rooted at the current working directory.
pub fn scaffold(main_class: &MainClass) -> Result<Vec<PathBuf>, ManifestError> {
    scaffold_at(&std::env::current_dir()?, main_class)
}

// ---------------------------------------------------------------------------
// 5. Record dependency
// ---------------------------------------------------------------------------

/// Load the manifest, insert (or replace) `name → dependency`, save it back.
///
/// Returns the updated manifest so callers can report the new dependency set.
pub fn record_dependency_at(
    root: &Path,
    name: &str,
    dependency: Dependency,
) -> Result<Manifest, ManifestError> {
    let mut manifest = load_at(root)?;
    manifest.record_dependency(name, dependency);
    save_at(root, &manifest)?;
    Ok(manifest)
}

/// `record_dependency_at` convenience wrapper rooted at the current working directory.
pub fn record_dependency(name: &str, dependency: Dependency) -> Result<Manifest, ManifestError> {
    record_dependency_at(&std::env::current_dir()?, name, dependency)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DependencyOrigin;
    use tempfile::TempDir;

    fn make_root() -> TempDir {
        TempDir::new().expect("tempdir")
    }

    #[test]
    fn manifest_path_is_correct() {
        let root = make_root();
        let path = manifest_path_at(root.path());
        assert!(path.ends_with("javelin.toml"));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let root = make_root();
        let mut manifest = Manifest::new(MainClass::from("com.acme.App"));
        manifest.record_dependency(
            "com.google.code.gson/gson",
            Dependency { origin: DependencyOrigin::Maven, version: "2.10.1".into() },
        );
        save_at(root.path(), &manifest).expect("save");
        let loaded = load_at(root.path()).expect("load");
        assert_eq!(loaded, manifest);
    }

    #[test]
    fn atomic_write_cleans_up_tmp() {
        let root = make_root();
        save_at(root.path(), &Manifest::new(MainClass::from("Main"))).expect("save");
        let tmp = root.path().join("javelin.toml.tmp");
        assert!(!tmp.exists(), ".tmp must be gone after successful save");
    }

    #[test]
    fn load_missing_manifest_returns_not_found() {
        let root = make_root();
        let err = load_at(root.path()).unwrap_err();
        assert!(matches!(err, ManifestError::ManifestNotFound { .. }));
    }

    #[test]
    fn scaffold_creates_manifest_sources_and_gitignore() {
        let root = make_root();
        let created =
            scaffold_at(root.path(), &MainClass::from("Main")).expect("scaffold");
        assert!(root.path().join("javelin.toml").is_file());
        assert!(root.path().join("src/Main.java").is_file());
        assert!(root.path().join("resources").is_dir());
        assert!(root.path().join("lib").is_dir());
        assert!(root.path().join(".gitignore").is_file());
        assert_eq!(created.len(), 5);

        let manifest = load_at(root.path()).expect("load");
        assert_eq!(manifest.main_class, MainClass::from("Main"));
        assert!(manifest.dependencies.is_empty());
    }

    #[test]
    fn scaffold_twice_refuses() {
        let root = make_root();
        scaffold_at(root.path(), &MainClass::from("Main")).expect("first scaffold");
        let err = scaffold_at(root.path(), &MainClass::from("Main")).unwrap_err();
        assert!(matches!(err, ManifestError::AlreadyInitialized { .. }));
    }

    #[test]
    fn scaffold_leaves_existing_gitignore_alone() {
        let root = make_root();
        std::fs::write(root.path().join(".gitignore"), "target/\n").expect("seed");
        scaffold_at(root.path(), &MainClass::from("Main")).expect("scaffold");
        let contents = std::fs::read_to_string(root.path().join(".gitignore")).expect("read");
        assert_eq!(contents, "target/\n");
    }

    #[test]
    fn record_dependency_persists() {
        let root = make_root();
        save_at(root.path(), &Manifest::new(MainClass::from("Main"))).expect("save");
        let updated = record_dependency_at(
            root.path(),
            "junit/junit",
            Dependency { origin: DependencyOrigin::Maven, version: "4.13.2".into() },
        )
        .expect("record");
        assert!(updated.dependencies.contains_key("junit/junit"));

        let reloaded = load_at(root.path()).expect("reload");
        assert_eq!(reloaded.dependencies["junit/junit"].version, "4.13.2");
    }
}
