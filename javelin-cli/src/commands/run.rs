//! `javelin run` builds if needed, then launches the program.
//!
//! With `--watch` the command never returns on its own: a background loop
//! keeps recompiling and relaunching the program as sources change, until
//! ctrl-c.

use anyhow::{Context, Result};
use clap::Args;

use javelin_core::{manifest, types::MainClass, Layout};
use javelin_watch::{LaunchSpec, Toolchain, WatchPaths};

use super::build::ensure_fresh;

/// Build if needed, then launch the program.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Entry-point class to launch instead of the one in javelin.toml.
    pub main_class: Option<String>,

    /// Keep running: rebuild and restart whenever src/ or resources/ change.
    #[arg(long)]
    pub watch: bool,
}

impl RunArgs {
    pub fn run(self) -> Result<()> {
        let layout = Layout::current().context("cannot resolve current directory")?;
        let manifest = manifest::load_at(&layout.root).context("failed to load javelin.toml")?;
        let main_class_override = self.main_class.map(MainClass);

        if self.watch {
            let paths = WatchPaths {
                source_dir: layout.source_dir.clone(),
                resources_dir: layout.resources_dir.clone(),
                mirror_dir: layout.mirror_dir.clone(),
            };
            let toolchain = JdkToolchain { layout, main_class_override };
            javelin_watch::start_blocking(paths, toolchain).context("watch runtime failed")?;
            return Ok(());
        }

        let main_class = main_class_override.unwrap_or(manifest.main_class);
        ensure_fresh(&layout, false)?;
        let status =
            javelin_jvm::run_blocking(&layout, &main_class).context("failed to launch java")?;
        if !status.success() {
            // The program already reported its own failure; just carry the code.
            std::process::exit(status.code().unwrap_or(1));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Watch-mode toolchain
// ---------------------------------------------------------------------------

/// Real JDK toolchain for one project: rebuild with javac, relaunch with java.
///
/// Without a CLI override the entry point is re-read from `javelin.toml` on
/// every launch, so editing it mid-watch takes effect on the next restart.
struct JdkToolchain {
    layout: Layout,
    main_class_override: Option<MainClass>,
}

impl JdkToolchain {
    fn main_class(&self) -> Result<MainClass> {
        match &self.main_class_override {
            Some(class) => Ok(class.clone()),
            None => {
                let manifest = manifest::load_at(&self.layout.root)
                    .context("failed to reload javelin.toml")?;
                Ok(manifest.main_class)
            }
        }
    }
}

impl Toolchain for JdkToolchain {
    fn rebuild(&self) -> Result<()> {
        javelin_jvm::compile(&self.layout)?;
        Ok(())
    }

    fn launch(&self) -> Result<LaunchSpec> {
        let command = javelin_jvm::java_command(&self.layout, &self.main_class()?)?;
        Ok(LaunchSpec::new(command.program, command.args))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use tempfile::TempDir;

    use javelin_core::Manifest;

    fn seed_manifest(root: &std::path::Path, main_class: &str) {
        manifest::save_at(root, &Manifest::new(MainClass::from(main_class))).expect("save manifest");
    }

    #[test]
    fn launch_rereads_the_manifest_entry_point() {
        let tmp = TempDir::new().expect("tempdir");
        seed_manifest(tmp.path(), "Main");
        let toolchain = JdkToolchain {
            layout: Layout::at(tmp.path()),
            main_class_override: None,
        };

        let spec = toolchain.launch().expect("launch");
        assert_eq!(spec.args.last(), Some(&OsString::from("Main")));

        // Editing the entry point between launches must change the next spec.
        seed_manifest(tmp.path(), "com.acme.Replacement");
        let spec = toolchain.launch().expect("relaunch");
        assert_eq!(spec.args.last(), Some(&OsString::from("com.acme.Replacement")));
    }

    #[test]
    fn cli_override_pins_the_entry_point() {
        let tmp = TempDir::new().expect("tempdir");
        seed_manifest(tmp.path(), "Main");
        let toolchain = JdkToolchain {
            layout: Layout::at(tmp.path()),
            main_class_override: Some(MainClass::from("Bench")),
        };

        seed_manifest(tmp.path(), "Other");
        let spec = toolchain.launch().expect("launch");
        assert_eq!(spec.args.last(), Some(&OsString::from("Bench")));
    }

    #[test]
    fn launch_without_a_manifest_is_an_error() {
        let tmp = TempDir::new().expect("tempdir");
        let toolchain = JdkToolchain {
            layout: Layout::at(tmp.path()),
            main_class_override: None,
        };
        assert!(toolchain.launch().is_err());
    }
}
