//! Manifest error-message, atomic-write-safety, and scaffold integration tests.

use assert_fs::prelude::*;
use javelin_core::{manifest, MainClass, ManifestError};
use predicates::prelude::predicate;
use std::fs;

// ---------------------------------------------------------------------------
// 1. Load error messages
// ---------------------------------------------------------------------------

#[test]
fn load_missing_manifest_returns_not_found() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    let err = manifest::load_at(root.path()).unwrap_err();
    assert!(matches!(err, ManifestError::ManifestNotFound { .. }), "got: {err}");
    assert!(err.to_string().contains("manifest not found"));
    assert!(err.to_string().contains("javelin.toml"));
    assert!(err.to_string().contains("javelin init"));
}

#[test]
fn load_corrupt_toml_returns_parse_error_with_path() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    fs::write(root.path().join("javelin.toml"), b"main_class = [unclosed\n= broken")
        .expect("write");

    let err = manifest::load_at(root.path()).unwrap_err();
    assert!(matches!(err, ManifestError::Parse { .. }), "got: {err}");
    let msg = err.to_string();
    assert!(msg.contains("javelin.toml"), "must contain file path, got: {msg}");
    let source_msg = match &err {
        ManifestError::Parse { source, .. } => source.to_string(),
        _ => unreachable!(),
    };
    assert!(!source_msg.is_empty(), "toml must provide error context");
}

#[test]
fn load_wrong_shape_toml_returns_parse_error() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    fs::write(root.path().join("javelin.toml"), b"main_class = 42\n").expect("write");

    let err = manifest::load_at(root.path()).unwrap_err();
    assert!(matches!(err, ManifestError::Parse { .. }), "got: {err}");
}

// ---------------------------------------------------------------------------
// 2. Atomic write safety
// ---------------------------------------------------------------------------

#[test]
fn save_cleans_up_tmp_file() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    let m = javelin_core::Manifest::new(MainClass::from("Main"));
    manifest::save_at(root.path(), &m).expect("save");
    root.child("javelin.toml.tmp")
        .assert(predicate::path::missing());
    root.child("javelin.toml").assert(predicate::path::is_file());
}

#[test]
fn save_replaces_existing_manifest_in_place() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    let m1 = javelin_core::Manifest::new(MainClass::from("One"));
    let m2 = javelin_core::Manifest::new(MainClass::from("Two"));
    manifest::save_at(root.path(), &m1).expect("first save");
    manifest::save_at(root.path(), &m2).expect("second save");
    let loaded = manifest::load_at(root.path()).expect("load");
    assert_eq!(loaded.main_class, MainClass::from("Two"));
}

// ---------------------------------------------------------------------------
// 3. Scaffold integration
// ---------------------------------------------------------------------------

#[test]
fn scaffold_produces_runnable_project_shape() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    manifest::scaffold_at(root.path(), &MainClass::from("Main")).expect("scaffold");

    root.child("javelin.toml").assert(predicate::path::is_file());
    root.child("src/Main.java")
        .assert(predicate::str::contains("public static void main"));
    root.child("resources").assert(predicate::path::is_dir());
    root.child("lib").assert(predicate::path::is_dir());
    root.child(".gitignore")
        .assert(predicate::str::contains(".javelin/"));
}

#[test]
fn scaffold_on_initialized_root_names_the_manifest() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    manifest::scaffold_at(root.path(), &MainClass::from("Main")).expect("scaffold");
    let err = manifest::scaffold_at(root.path(), &MainClass::from("Main")).unwrap_err();
    assert!(err.to_string().contains("already initialized"), "got: {err}");
    assert!(err.to_string().contains("javelin.toml"), "got: {err}");
}

#[test]
fn scaffold_keeps_existing_main_java() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    fs::create_dir_all(root.path().join("src")).expect("mkdir");
    fs::write(root.path().join("src/Main.java"), "// custom\n").expect("seed");

    manifest::scaffold_at(root.path(), &MainClass::from("Main")).expect("scaffold");
    root.child("src/Main.java").assert("// custom\n");
}
