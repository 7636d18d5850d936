//! `javelin init` scaffolds a new project in the current directory.

use anyhow::{Context, Result};
use clap::Args;

use javelin_core::{manifest, types::MainClass, Layout};

/// Scaffold a new Java project in the current directory.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Entry-point class recorded in javelin.toml (e.g. "Main" or "com.acme.App").
    #[arg(long, default_value = "Main")]
    pub main_class: String,
}

impl InitArgs {
    pub fn run(self) -> Result<()> {
        let layout = Layout::current().context("cannot resolve current directory")?;
        let main_class = MainClass(self.main_class);

        let created = manifest::scaffold_at(&layout.root, &main_class)
            .context("failed to scaffold project")?;

        println!("✓ Initialized Java project (entry point '{main_class}')");
        for path in &created {
            let shown = path.strip_prefix(&layout.root).unwrap_or(path);
            println!("  + {}", shown.display());
        }
        println!("Next: `javelin run` compiles and launches it.");
        Ok(())
    }
}
