//! Maven Central coordinates.
//!
//! Coordinates arrive in purl form, `pkg:maven/<group>/<artifact>@<version>`,
//! and resolve to a single jar under the Maven Central repository layout
//! (group dots become path segments).

use std::fmt;
use std::path::{Path, PathBuf};

use crate::download;
use crate::error::FetchError;

/// Scheme prefix of a Maven purl.
pub const MAVEN_PURL_PREFIX: &str = "pkg:maven/";

const CENTRAL_BASE: &str = "https://repo1.maven.org/maven2";

/// A fully-qualified Maven artifact: group, artifact, version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MavenCoordinate {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl MavenCoordinate {
    /// Parse a `pkg:maven/<group>/<artifact>@<version>` purl.
    ///
    /// The group keeps its dotted form here; dots only turn into path
    /// segments when the download URL is built.
    pub fn parse(input: &str) -> Result<Self, FetchError> {
        let invalid = || FetchError::InvalidCoordinate {
            input: input.to_string(),
        };

        let rest = input.strip_prefix(MAVEN_PURL_PREFIX).ok_or_else(invalid)?;
        let (group, artifact_version) = rest.split_once('/').ok_or_else(invalid)?;
        let (artifact, version) = artifact_version.split_once('@').ok_or_else(invalid)?;
        if group.is_empty()
            || artifact.is_empty()
            || version.is_empty()
            || artifact.contains('/')
            || version.contains('/')
        {
            return Err(invalid());
        }

        Ok(Self {
            group: group.to_string(),
            artifact: artifact.to_string(),
            version: version.to_string(),
        })
    }

    /// Rebuild a coordinate from a manifest entry (`<group>/<artifact>` key
    /// plus recorded version). Inverse of [`manifest_key`](Self::manifest_key).
    pub fn from_manifest_entry(key: &str, version: &str) -> Result<Self, FetchError> {
        Self::parse(&format!("{MAVEN_PURL_PREFIX}{key}@{version}"))
    }

    /// File name of the artifact jar, `<artifact>-<version>.jar`.
    pub fn jar_file_name(&self) -> String {
        format!("{}-{}.jar", self.artifact, self.version)
    }

    /// Maven Central download URL for the jar.
    pub fn download_url(&self) -> String {
        format!(
            "{CENTRAL_BASE}/{}/{}/{}/{}",
            self.group.replace('.', "/"),
            self.artifact,
            self.version,
            self.jar_file_name()
        )
    }

    /// Key under which this artifact is recorded in the project manifest.
    pub fn manifest_key(&self) -> String {
        format!("{}/{}", self.group, self.artifact)
    }
}

impl fmt::Display for MavenCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{MAVEN_PURL_PREFIX}{}/{}@{}",
            self.group, self.artifact, self.version
        )
    }
}

/// Download the coordinate's jar from Maven Central into `lib_dir`.
/// Returns the path of the written jar.
pub fn install_maven(coordinate: &MavenCoordinate, lib_dir: &Path) -> Result<PathBuf, FetchError> {
    let dest = lib_dir.join(coordinate.jar_file_name());
    let url = coordinate.download_url();
    tracing::info!("fetching {} from Maven Central", coordinate);
    let bytes = download::fetch_jar(&url, &dest)?;
    tracing::debug!("wrote {} ({} bytes)", dest.display(), bytes);
    Ok(dest)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
