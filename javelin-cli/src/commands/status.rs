//! `javelin status` shows what changed since the last build.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use javelin_cache::{desired_snapshot, divergence, Divergence, Mirror};
use javelin_core::{manifest, Layout, MainClass};

/// Show which source and resource files changed since the last build.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl StatusArgs {
    pub fn run(self) -> Result<()> {
        let layout = Layout::current().context("cannot resolve current directory")?;
        let manifest = manifest::load_at(&layout.root).context("failed to load javelin.toml")?;

        let desired = desired_snapshot(&layout.source_dir, &layout.resources_dir)
            .context("failed to scan src/ and resources/")?;
        let actual = Mirror::new(&layout.mirror_dir)
            .snapshot()
            .context("failed to scan the build mirror")?;

        let report = StatusReport {
            main_class: manifest.main_class,
            dependencies: manifest.dependencies.len(),
            tracked: desired.len(),
            never_built: actual.is_empty() && !desired.is_empty(),
            divergence: divergence(&desired, &actual),
        };

        if self.json {
            print_json(&report)?;
            return Ok(());
        }
        print_plain(&report);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Report model
// ---------------------------------------------------------------------------

struct StatusReport {
    main_class: MainClass,
    dependencies: usize,
    tracked: usize,
    never_built: bool,
    divergence: Divergence,
}

#[derive(Serialize)]
struct StatusJson {
    manifest: ManifestJson,
    summary: StatusSummaryJson,
    new: Vec<String>,
    modified: Vec<String>,
    removed: Vec<String>,
}

#[derive(Serialize)]
struct ManifestJson {
    main_class: String,
    dependencies: usize,
}

#[derive(Serialize)]
struct StatusSummaryJson {
    tracked: usize,
    changed: usize,
    stale: bool,
    never_built: bool,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn print_json(report: &StatusReport) -> Result<()> {
    let payload = StatusJson {
        manifest: ManifestJson {
            main_class: report.main_class.to_string(),
            dependencies: report.dependencies,
        },
        summary: StatusSummaryJson {
            tracked: report.tracked,
            changed: report.divergence.len(),
            stale: !report.divergence.is_empty(),
            never_built: report.never_built,
        },
        new: report.divergence.missing.clone(),
        modified: report.divergence.modified.clone(),
        removed: report.divergence.orphaned.clone(),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).context("failed to serialize status JSON")?
    );
    Ok(())
}

fn print_plain(report: &StatusReport) {
    println!(
        "javelin v{} | main class {} | {} dependencies | {} file(s) tracked | {} changed",
        env!("CARGO_PKG_VERSION"),
        report.main_class,
        report.dependencies,
        report.tracked,
        report.divergence.len(),
    );

    if report.divergence.is_empty() {
        println!(
            "{} Up to date; `javelin build` has nothing to do.",
            "✓".green().bold()
        );
        return;
    }

    if report.never_built {
        println!("Never built; every file counts as new.");
    }
    for path in &report.divergence.missing {
        println!("  {} {path}", "+".green().bold());
    }
    for path in &report.divergence.modified {
        println!("  {} {path}", "~".yellow().bold());
    }
    for path in &report.divergence.orphaned {
        println!("  {} {path}", "-".red().bold());
    }
    println!("Run `javelin build` to pick up these changes.");
}
