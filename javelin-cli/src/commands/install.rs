//! `javelin install` downloads jar dependencies into lib/.

use std::fs;

use anyhow::{bail, Context, Result};
use clap::Args;

use javelin_core::{
    manifest,
    types::{Dependency, DependencyOrigin, Manifest},
    Layout,
};
use javelin_fetch::{GithubRepo, MavenCoordinate, MAVEN_PURL_PREFIX};

/// Download a jar dependency into lib/ and record it in javelin.toml.
#[derive(Args, Debug)]
pub struct InstallArgs {
    /// `pkg:maven/<group>/<artifact>@<version>`, `<owner>/<repo>`, or a GitHub
    /// repository URL. Omit to install everything listed in javelin.toml.
    pub target: Option<String>,
}

impl InstallArgs {
    pub fn run(self) -> Result<()> {
        let layout = Layout::current().context("cannot resolve current directory")?;
        let manifest = manifest::load_at(&layout.root).context("failed to load javelin.toml")?;
        fs::create_dir_all(&layout.lib_dir)
            .with_context(|| format!("cannot create {}", layout.lib_dir.display()))?;

        match self.target {
            Some(target) => install_one(&layout, &target),
            None => restore_all(&layout, &manifest),
        }
    }
}

// ---------------------------------------------------------------------------
// Single install: download first, record in the manifest only on success
// ---------------------------------------------------------------------------

fn install_one(layout: &Layout, target: &str) -> Result<()> {
    if target.starts_with(MAVEN_PURL_PREFIX) {
        let coordinate = MavenCoordinate::parse(target)?;
        let jar = javelin_fetch::install_maven(&coordinate, &layout.lib_dir)
            .with_context(|| format!("failed to install '{coordinate}'"))?;
        manifest::record_dependency_at(
            &layout.root,
            &coordinate.manifest_key(),
            Dependency {
                origin: DependencyOrigin::Maven,
                version: coordinate.version.clone(),
            },
        )?;
        println!(
            "✓ Installed {} {}",
            coordinate.manifest_key(),
            coordinate.version
        );
        println!("  Saved to: {}", jar.display());
    } else {
        let repo = GithubRepo::parse(target)?;
        let jar = javelin_fetch::install_github(&repo, &layout.lib_dir)
            .with_context(|| format!("failed to install '{repo}'"))?;
        manifest::record_dependency_at(
            &layout.root,
            &repo.manifest_key(),
            Dependency {
                origin: DependencyOrigin::Github,
                version: String::new(),
            },
        )?;
        println!("✓ Installed {repo}");
        println!("  Saved to: {}", jar.display());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Restore: reinstall everything the manifest lists
// ---------------------------------------------------------------------------

fn restore_all(layout: &Layout, manifest: &Manifest) -> Result<()> {
    if manifest.dependencies.is_empty() {
        println!("No dependencies listed in javelin.toml.");
        return Ok(());
    }

    let mut failures = 0usize;
    for (name, dependency) in &manifest.dependencies {
        if let Err(err) = restore_one(layout, name, dependency) {
            eprintln!("✗ {name}: {err:#}");
            failures += 1;
        }
    }

    let total = manifest.dependencies.len();
    if failures > 0 {
        bail!("{failures} of {total} dependencies failed to install");
    }
    println!(
        "✓ Installed {} dependencies into {}",
        total,
        layout.lib_dir.display()
    );
    Ok(())
}

fn restore_one(layout: &Layout, name: &str, dependency: &Dependency) -> Result<()> {
    let jar = match dependency.origin {
        DependencyOrigin::Maven => {
            let coordinate = MavenCoordinate::from_manifest_entry(name, &dependency.version)?;
            javelin_fetch::install_maven(&coordinate, &layout.lib_dir)?
        }
        DependencyOrigin::Github => {
            let repo = GithubRepo::parse(name)?;
            javelin_fetch::install_github(&repo, &layout.lib_dir)?
        }
    };
    println!("✓ {name} ({})", jar.display());
    Ok(())
}
