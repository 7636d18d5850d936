//! Classpath assembly from the project's jar directory.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{io_err, JvmError};

/// All `.jar` files under `lib_dir`, recursively, sorted for stable command
/// lines. A missing directory simply contributes no entries.
pub fn jars_under(lib_dir: &Path) -> Result<Vec<PathBuf>, JvmError> {
    let mut jars = Vec::new();
    if lib_dir.exists() {
        collect_jars(lib_dir, &mut jars)?;
        jars.sort();
    }
    Ok(jars)
}

/// Join classpath entries with the platform's path-list separator
/// (`:` on Unix, `;` on Windows).
pub fn join(entries: &[PathBuf]) -> Result<OsString, JvmError> {
    Ok(std::env::join_paths(entries)?)
}

fn collect_jars(dir: &Path, jars: &mut Vec<PathBuf>) -> Result<(), JvmError> {
    for entry in std::fs::read_dir(dir).map_err(|e| io_err(dir, e))? {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| io_err(&path, e))?;
        if file_type.is_dir() {
            collect_jars(&path, jars)?;
        } else if path.extension().is_some_and(|ext| ext == "jar") {
            jars.push(path);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
