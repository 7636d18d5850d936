//! jar packaging.

use std::path::{Path, PathBuf};
use std::process::Command;

use javelin_core::{Layout, MainClass};

use crate::classpath;
use crate::error::{io_err, JvmError};

/// File name of the packaged application jar under the build dir.
pub const JAR_NAME: &str = "app.jar";

const MANIFEST_NAME: &str = "MANIFEST.MF";

/// Package the compiled classes into `build/app.jar` with a manifest that
/// names the entry point and an absolute `Class-Path` for dependency jars,
/// so the jar stays runnable via `java -jar` from any directory.
///
/// Expects [`compile`](crate::compile) to have populated the classes dir.
/// Returns the path of the written jar.
pub fn package_jar(layout: &Layout, main_class: &MainClass) -> Result<PathBuf, JvmError> {
    std::fs::create_dir_all(&layout.build_dir).map_err(|e| io_err(&layout.build_dir, e))?;

    let mut jars = Vec::new();
    for jar in classpath::jars_under(&layout.lib_dir)? {
        jars.push(std::path::absolute(&jar).map_err(|e| io_err(&jar, e))?);
    }

    let manifest_path = layout.classes_dir.join(MANIFEST_NAME);
    std::fs::write(&manifest_path, manifest_text(main_class, &jars))
        .map_err(|e| io_err(&manifest_path, e))?;

    let jar_path = layout.build_dir.join(JAR_NAME);
    let status = jar_command(&manifest_path, &jar_path, &layout.classes_dir).status();

    // Scratch manifest, not part of the build output. Remove it before
    // interpreting the exit status so it never lingers on failure either.
    if let Err(e) = std::fs::remove_file(&manifest_path) {
        tracing::warn!("could not remove {}: {}", manifest_path.display(), e);
    }

    let status = status.map_err(|e| JvmError::Spawn { program: "jar", source: e })?;
    if !status.success() {
        return Err(JvmError::PackageFailed { status });
    }
    tracing::debug!("packaged {}", jar_path.display());
    Ok(jar_path)
}

/// Manifest body for the application jar. The `Class-Path` attribute is
/// always present, empty or not, and lists absolute jar paths separated by
/// single spaces.
fn manifest_text(main_class: &MainClass, jars: &[PathBuf]) -> String {
    let class_path = jars
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ");
    format!("Main-Class: {}\nClass-Path: {}\n", main_class, class_path)
}

/// `jar cmf <manifest> <jar> -C <classes> .`
fn jar_command(manifest: &Path, jar_path: &Path, classes_dir: &Path) -> Command {
    let mut cmd = Command::new("jar");
    cmd.arg("cmf").arg(manifest).arg(jar_path);
    cmd.arg("-C").arg(classes_dir).arg(".");
    cmd
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
