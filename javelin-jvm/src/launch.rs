//! java invocation.

use std::ffi::OsString;
use std::process::{Command, ExitStatus};

use javelin_core::{Layout, MainClass};

use crate::classpath;
use crate::error::JvmError;

/// A fully-resolved `java` invocation, inspectable before it is spawned.
///
/// The watch loop needs the program and argument list without an attached
/// child process, so the command is carried as plain data here and turned
/// into a [`Command`] at spawn time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaCommand {
    pub program: String,
    pub args: Vec<OsString>,
}

impl JavaCommand {
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

/// Build `java -cp <classes>[:jars] <main_class>` for the layout.
///
/// The compiled classes dir always leads the classpath; dependency jars
/// follow in sorted order.
pub fn java_command(layout: &Layout, main_class: &MainClass) -> Result<JavaCommand, JvmError> {
    let mut entries = vec![layout.classes_dir.clone()];
    entries.extend(classpath::jars_under(&layout.lib_dir)?);
    let cp = classpath::join(&entries)?;

    Ok(JavaCommand {
        program: "java".to_string(),
        args: vec![OsString::from("-cp"), cp, OsString::from(main_class.0.as_str())],
    })
}

/// Run the program in the foreground, inheriting stdio, and hand back its
/// exit status. Used by one-shot `run`; watch mode spawns the same command
/// through a supervisor instead.
pub fn run_blocking(layout: &Layout, main_class: &MainClass) -> Result<ExitStatus, JvmError> {
    let invocation = java_command(layout, main_class)?;
    tracing::debug!("launching {}", main_class);
    invocation
        .to_command()
        .status()
        .map_err(|e| JvmError::Spawn { program: "java", source: e })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
