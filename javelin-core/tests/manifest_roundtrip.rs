//! Serde roundtrip coverage for the manifest model.
//!
//! Every variant a manifest can take on disk must survive
//! serialize → deserialize unchanged.

use javelin_core::types::{Dependency, DependencyOrigin, MainClass, Manifest};
use rstest::rstest;

// ---------------------------------------------------------------------------
// Fixture manifests
// ---------------------------------------------------------------------------

fn minimal_manifest() -> Manifest {
    Manifest::new(MainClass::from("Main"))
}

fn maven_manifest() -> Manifest {
    let mut m = Manifest::new(MainClass::from("com.acme.cli.App"));
    m.record_dependency(
        "org.apache.commons/commons-lang3",
        Dependency { origin: DependencyOrigin::Maven, version: "3.14.0".into() },
    );
    m.record_dependency(
        "com.google.code.gson/gson",
        Dependency { origin: DependencyOrigin::Maven, version: "2.10.1".into() },
    );
    m
}

fn github_manifest() -> Manifest {
    let mut m = Manifest::new(MainClass::from("App"));
    m.record_dependency(
        "junit-team/junit4",
        Dependency { origin: DependencyOrigin::Github, version: "r4.13.2".into() },
    );
    m
}

fn mixed_manifest() -> Manifest {
    let mut m = maven_manifest();
    m.record_dependency(
        "google/guava",
        Dependency { origin: DependencyOrigin::Github, version: String::new() },
    );
    m
}

// ---------------------------------------------------------------------------
// Parameterised roundtrip test
// ---------------------------------------------------------------------------

#[rstest]
#[case("minimal", minimal_manifest())]
#[case("maven_only", maven_manifest())]
#[case("github_only", github_manifest())]
#[case("mixed_origins", mixed_manifest())]
fn manifest_roundtrip(#[case] label: &str, #[case] manifest: Manifest) {
    let text = toml::to_string_pretty(&manifest)
        .unwrap_or_else(|e| panic!("[{label}] serialize failed: {e}"));
    let back: Manifest =
        toml::from_str(&text).unwrap_or_else(|e| panic!("[{label}] deserialize failed: {e}"));
    assert_eq!(manifest.main_class, back.main_class, "[{label}] main class");
    assert_eq!(
        manifest.dependencies.len(),
        back.dependencies.len(),
        "[{label}] dependency count"
    );
    for ((on, od), (gn, gd)) in manifest.dependencies.iter().zip(back.dependencies.iter()) {
        assert_eq!(on, gn, "[{label}] dependency name");
        assert_eq!(od.origin, gd.origin, "[{label}] origin for {on}");
        assert_eq!(od.version, gd.version, "[{label}] version for {on}");
    }
}

// ---------------------------------------------------------------------------
// Origin casing (all DependencyOrigin variants)
// ---------------------------------------------------------------------------

#[rstest]
#[case(DependencyOrigin::Maven, "maven")]
#[case(DependencyOrigin::Github, "github")]
fn origin_serializes_lowercase(#[case] origin: DependencyOrigin, #[case] expected: &str) {
    let mut m = Manifest::new(MainClass::from("Main"));
    m.record_dependency("a/b", Dependency { origin, version: "1".into() });
    let text = toml::to_string(&m).expect("serialize");
    assert!(
        text.contains(&format!("origin = \"{expected}\"")),
        "expected origin \"{expected}\" in:\n{text}"
    );
}

// ---------------------------------------------------------------------------
// Stable dependency ordering
// ---------------------------------------------------------------------------

#[test]
fn dependencies_serialize_in_sorted_order() {
    let mut m = Manifest::new(MainClass::from("Main"));
    m.record_dependency("zzz/last", Dependency { origin: DependencyOrigin::Maven, version: "1".into() });
    m.record_dependency("aaa/first", Dependency { origin: DependencyOrigin::Maven, version: "1".into() });
    let text = toml::to_string_pretty(&m).expect("serialize");
    let first = text.find("aaa/first").expect("first key present");
    let last = text.find("zzz/last").expect("last key present");
    assert!(first < last, "keys must serialize sorted:\n{text}");
}
