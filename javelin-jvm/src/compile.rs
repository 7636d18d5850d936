//! javac invocation.

use std::path::{Path, PathBuf};
use std::process::Command;

use javelin_core::Layout;

use crate::classpath;
use crate::error::{io_err, JvmError};

/// Compile every `.java` source under the layout's source tree into
/// `classes_dir`, then copy the resources tree over the compiled output.
///
/// The classes dir is cleared first so removed sources leave no stale
/// `.class` files behind. javac inherits stdio, so compiler diagnostics land
/// on the terminal unmodified. Fails with [`JvmError::CompileFailed`] when
/// javac exits non-zero.
pub fn compile(layout: &Layout) -> Result<(), JvmError> {
    let sources = java_sources(&layout.source_dir)?;
    if sources.is_empty() {
        return Err(JvmError::NoSources { dir: layout.source_dir.clone() });
    }
    let jars = classpath::jars_under(&layout.lib_dir)?;

    std::fs::create_dir_all(&layout.classes_dir).map_err(|e| io_err(&layout.classes_dir, e))?;
    clear_dir(&layout.classes_dir)?;

    let mut cmd = javac_command(layout, &jars, &sources)?;
    tracing::debug!("compiling {} source file(s)", sources.len());
    let status = cmd
        .status()
        .map_err(|e| JvmError::Spawn { program: "javac", source: e })?;
    if !status.success() {
        return Err(JvmError::CompileFailed { status });
    }

    if layout.resources_dir.exists() {
        copy_dir(&layout.resources_dir, &layout.classes_dir)?;
    }
    Ok(())
}

/// Build the `javac [-cp <jars>] -d <classes> <sources…>` command.
///
/// `-cp` is omitted entirely when no jars are present, matching what a
/// hand-typed invocation would look like.
fn javac_command(
    layout: &Layout,
    jars: &[PathBuf],
    sources: &[PathBuf],
) -> Result<Command, JvmError> {
    let mut cmd = Command::new("javac");
    if !jars.is_empty() {
        cmd.arg("-cp").arg(classpath::join(jars)?);
    }
    cmd.arg("-d").arg(&layout.classes_dir);
    cmd.args(sources);
    Ok(cmd)
}

/// All `.java` files under `src_dir`, recursively, sorted. A missing source
/// tree is an I/O error naming the tree.
fn java_sources(src_dir: &Path) -> Result<Vec<PathBuf>, JvmError> {
    let mut sources = Vec::new();
    collect_sources(src_dir, &mut sources)?;
    sources.sort();
    Ok(sources)
}

fn collect_sources(dir: &Path, sources: &mut Vec<PathBuf>) -> Result<(), JvmError> {
    for entry in std::fs::read_dir(dir).map_err(|e| io_err(dir, e))? {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| io_err(&path, e))?;
        if file_type.is_dir() {
            collect_sources(&path, sources)?;
        } else if path.extension().is_some_and(|ext| ext == "java") {
            sources.push(path);
        }
    }
    Ok(())
}

/// Remove every entry directly under `dir`, leaving `dir` itself.
fn clear_dir(dir: &Path) -> Result<(), JvmError> {
    for entry in std::fs::read_dir(dir).map_err(|e| io_err(dir, e))? {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| io_err(&path, e))?;
        if file_type.is_dir() {
            std::fs::remove_dir_all(&path).map_err(|e| io_err(&path, e))?;
        } else {
            std::fs::remove_file(&path).map_err(|e| io_err(&path, e))?;
        }
    }
    Ok(())
}

/// Recursive copy preserving file permission bits (`fs::copy`).
fn copy_dir(from: &Path, to: &Path) -> Result<(), JvmError> {
    std::fs::create_dir_all(to).map_err(|e| io_err(to, e))?;
    for entry in std::fs::read_dir(from).map_err(|e| io_err(from, e))? {
        let entry = entry.map_err(|e| io_err(from, e))?;
        let path = entry.path();
        let dest = to.join(entry.file_name());
        let file_type = entry.file_type().map_err(|e| io_err(&path, e))?;
        if file_type.is_dir() {
            copy_dir(&path, &dest)?;
        } else {
            std::fs::copy(&path, &dest).map_err(|e| io_err(&dest, e))?;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
