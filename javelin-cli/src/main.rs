//! Javelin, a build and run tool for plain-javac Java projects.
//!
//! # Usage
//!
//! ```text
//! javelin init [--main-class <name>]
//! javelin build [--jar] [--force]
//! javelin run [main_class] [--watch]
//! javelin install [pkg:maven/<group>/<artifact>@<version> | <owner>/<repo> | <github url>]
//! javelin status [--json]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    build::BuildArgs, init::InitArgs, install::InstallArgs, run::RunArgs, status::StatusArgs,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "javelin",
    version,
    about = "Build, run, and hot-reload Java projects",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scaffold a new Java project in the current directory.
    Init(InitArgs),

    /// Compile sources that changed since the last build.
    Build(BuildArgs),

    /// Build if needed, then launch the program.
    Run(RunArgs),

    /// Download a jar dependency into lib/ and record it in javelin.toml.
    Install(InstallArgs),

    /// Show which source and resource files changed since the last build.
    Status(StatusArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Init(args) => args.run(),
        Commands::Build(args) => args.run(),
        Commands::Run(args) => args.run(),
        Commands::Install(args) => args.run(),
        Commands::Status(args) => args.run(),
    }
}
