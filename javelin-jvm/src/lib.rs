//! JDK toolchain plumbing: compiling sources with `javac`, launching with
//! `java`, and packaging runnable jars with `jar`.
//!
//! All three tools are invoked as external processes with inherited stdio,
//! so compiler diagnostics and program output reach the terminal untouched.
//! Nothing here parses javac output; the exit status is the verdict.

pub mod classpath;
pub mod compile;
pub mod error;
pub mod launch;
pub mod package;

pub use compile::compile;
pub use error::JvmError;
pub use launch::{java_command, run_blocking, JavaCommand};
pub use package::{package_jar, JAR_NAME};
