//! Domain types for the javelin manifest.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.
//! All types are serializable/deserializable via serde + toml.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed fully-qualified Java main class name (e.g. `com.acme.Main`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MainClass(pub String);

impl fmt::Display for MainClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for MainClass {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MainClass {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Where a jar dependency is fetched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DependencyOrigin {
    #[default]
    Maven,
    Github,
}

impl fmt::Display for DependencyOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyOrigin::Maven => write!(f, "maven"),
            DependencyOrigin::Github => write!(f, "github"),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A single jar dependency recorded in the manifest.
///
/// The dependency name (the map key in [`Manifest::dependencies`]) is
/// `groupId/artifactId` for Maven and `owner/repo` for GitHub releases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub origin: DependencyOrigin,
    /// Maven version or GitHub release tag.
    #[serde(default)]
    pub version: String,
}

/// Root of the `javelin.toml` manifest.
///
/// Dependencies live in a `BTreeMap` so saves serialize in a stable order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub main_class: MainClass,
    #[serde(default)]
    pub dependencies: BTreeMap<String, Dependency>,
}

impl Manifest {
    /// A fresh manifest with no dependencies.
    pub fn new(main_class: MainClass) -> Self {
        Self { main_class, dependencies: BTreeMap::new() }
    }

    /// Insert or replace a dependency entry.
    pub fn record_dependency(&mut self, name: impl Into<String>, dependency: Dependency) {
        self.dependencies.insert(name.into(), dependency);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
