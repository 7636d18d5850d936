//! GitHub latest-release lookup.
//!
//! A dependency may point at a GitHub repository instead of Maven Central.
//! Resolution asks the releases API for the latest release and picks the
//! first asset served as `application/java-archive`.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::download;
use crate::error::{http_err, FetchError};

const JAR_CONTENT_TYPE: &str = "application/java-archive";

/// An `owner/repo` pair on github.com.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubRepo {
    pub owner: String,
    pub repo: String,
}

impl GithubRepo {
    /// Accepts plain `owner/repo` or a `https://github.com/owner/repo[/...]`
    /// URL; anything trailing the repo segment is ignored.
    pub fn parse(input: &str) -> Result<Self, FetchError> {
        let invalid = || FetchError::InvalidRepo {
            input: input.to_string(),
        };

        let rest = input
            .strip_prefix("https://github.com/")
            .or_else(|| input.strip_prefix("github.com/"))
            .unwrap_or(input);
        if rest.contains("://") {
            return Err(invalid());
        }

        let mut segments = rest.split('/');
        let owner = segments.next().filter(|s| !s.is_empty()).ok_or_else(invalid)?;
        let repo = segments.next().filter(|s| !s.is_empty()).ok_or_else(invalid)?;
        if rest == input && segments.next().is_some() {
            // Bare references must be exactly owner/repo; only real URLs may
            // carry extra path segments.
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    /// Releases API endpoint for the latest release.
    pub fn api_url(&self) -> String {
        format!(
            "https://api.github.com/repos/{}/{}/releases/latest",
            self.owner, self.repo
        )
    }

    /// Key under which this repository is recorded in the project manifest.
    pub fn manifest_key(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

impl fmt::Display for GithubRepo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Subset of the releases API response we care about.
#[derive(Debug, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
    pub content_type: String,
    pub browser_download_url: String,
}

/// First asset in the release advertising the jar content type.
pub fn jar_asset(release: &Release) -> Option<&ReleaseAsset> {
    release
        .assets
        .iter()
        .find(|asset| asset.content_type == JAR_CONTENT_TYPE)
}

/// Resolve the jar asset of the repository's latest release.
pub fn latest_jar_asset(repo: &GithubRepo) -> Result<ReleaseAsset, FetchError> {
    let url = repo.api_url();
    let response = ureq::get(&url)
        .set("User-Agent", download::USER_AGENT)
        .call()
        .map_err(|e| http_err(&url, e))?;
    let release: Release = response.into_json().map_err(|e| FetchError::Body {
        url: url.clone(),
        source: e,
    })?;

    jar_asset(&release)
        .cloned()
        .ok_or_else(|| FetchError::NoJarAsset {
            repo: repo.to_string(),
        })
}

/// Download the latest-release jar of `repo` into `lib_dir`.
/// Returns the path of the written jar.
pub fn install_github(repo: &GithubRepo, lib_dir: &Path) -> Result<PathBuf, FetchError> {
    let asset = latest_jar_asset(repo)?;
    let dest = lib_dir.join(&asset.name);
    tracing::info!("fetching {} from {}", asset.name, repo);
    let bytes = download::fetch_jar(&asset.browser_download_url, &dest)?;
    tracing::debug!("wrote {} ({} bytes)", dest.display(), bytes);
    Ok(dest)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
