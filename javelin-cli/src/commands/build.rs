//! `javelin build` compiles changed sources into `.javelin/bin`.

use anyhow::{Context, Result};
use clap::Args;

use javelin_cache::{desired_snapshot, divergence, is_up_to_date, Mirror};
use javelin_core::{manifest, Layout};

/// Compile sources that changed since the last build.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Package the compiled classes into `.javelin/build/app.jar`.
    #[arg(long)]
    pub jar: bool,

    /// Compile even when nothing changed since the last build.
    #[arg(long)]
    pub force: bool,
}

impl BuildArgs {
    pub fn run(self) -> Result<()> {
        let layout = Layout::current().context("cannot resolve current directory")?;
        let manifest = manifest::load_at(&layout.root).context("failed to load javelin.toml")?;

        match ensure_fresh(&layout, self.force)? {
            BuildOutcome::Fresh => println!("✓ Up to date; nothing to compile."),
            BuildOutcome::Rebuilt { changed } => println!(
                "✓ Compiled {} changed file(s) into {}",
                changed,
                layout.classes_dir.display()
            ),
        }

        if self.jar {
            let jar_path = javelin_jvm::package_jar(&layout, &manifest.main_class)
                .context("failed to package jar")?;
            println!("✓ Packaged {}", jar_path.display());
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Shared build pipeline
// ---------------------------------------------------------------------------

/// What `ensure_fresh` did.
pub(crate) enum BuildOutcome {
    /// The mirror already matched src/ and resources/; nothing ran.
    Fresh,
    /// The mirror was resynced and the project recompiled.
    Rebuilt { changed: usize },
}

/// Compile the project if (and only if) something changed since the last
/// build. `force` skips the staleness gate but still resyncs the mirror so
/// the next check starts from a truthful baseline.
pub(crate) fn ensure_fresh(layout: &Layout, force: bool) -> Result<BuildOutcome> {
    let desired = desired_snapshot(&layout.source_dir, &layout.resources_dir)
        .context("failed to scan src/ and resources/")?;
    let mirror = Mirror::new(&layout.mirror_dir);
    let actual = mirror.snapshot().context("failed to scan the build mirror")?;

    if !force && is_up_to_date(&desired, &actual) {
        return Ok(BuildOutcome::Fresh);
    }

    let changed = divergence(&desired, &actual).len();
    mirror
        .sync(&layout.source_dir, &layout.resources_dir)
        .context("failed to sync the build mirror")?;
    javelin_jvm::compile(layout).context("compilation failed")?;
    Ok(BuildOutcome::Rebuilt { changed })
}
