//! Dependency acquisition for javelin projects.
//!
//! Two origins are supported: Maven Central coordinates in purl form
//! (`pkg:maven/<group>/<artifact>@<version>`) and GitHub repositories whose
//! latest release carries a jar asset. Either way the jar lands in the
//! project's `lib/` directory; recording the dependency in the manifest is
//! the caller's business.

pub mod download;
pub mod error;
pub mod github;
pub mod maven;

pub use download::fetch_jar;
pub use error::FetchError;
pub use github::{install_github, GithubRepo};
pub use maven::{install_maven, MavenCoordinate, MAVEN_PURL_PREFIX};
