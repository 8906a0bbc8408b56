//! gdkit: build and housekeeping for Godot GDExtension projects.
//!
//! # Usage
//!
//! ```text
//! gdkit build [-j N] [-p NAME] [--build-command PROG] [--fail-on-build-error]
//! gdkit init <NAME> [--entry-symbol SYM]
//! gdkit rename <NAME>
//! gdkit generate
//! gdkit fixup
//! gdkit diff
//! gdkit show [--json]
//! ```
//!
//! Global flags `--root`, `--properties` and `--templates` pick the project
//! root, the properties file and a template override directory.

mod commands;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    build::BuildArgs, diff::DiffArgs, fixup::FixupArgs, generate::GenerateArgs, init::InitArgs,
    rename::RenameArgs, show::ShowArgs, Workspace,
};
use gdkit_core::{EntrySymbol, ProjectName};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "gdkit",
    version,
    about = "Build, rename and fix up Godot GDExtension projects",
    long_about = None,
)]
struct Cli {
    /// Directory holding properties.cfg and the project directory.
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Properties file [default: <root>/properties.cfg].
    #[arg(long, global = true)]
    properties: Option<PathBuf>,

    /// Directory with `*.tera` files overriding the built-in templates.
    #[arg(long, global = true)]
    templates: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Optionally rename, run the build tool, then fix up the descriptor.
    Build(BuildArgs),

    /// Scaffold a new project directory and properties file.
    Init(InitArgs),

    /// Rename the project without building.
    Rename(RenameArgs),

    /// Clear bin/ and regenerate the descriptor from the properties file.
    Generate(GenerateArgs),

    /// Rename and patch the descriptor left by a build.
    Fixup(FixupArgs),

    /// Show a unified diff of the descriptor against a regenerated one.
    Diff(DiffArgs),

    /// Print the project identity from the properties file.
    Show(ShowArgs),
}

// ---------------------------------------------------------------------------
// Validated arguments, parsed from CLI strings into core types
// ---------------------------------------------------------------------------

/// Thin wrapper so clap can parse a validated `ProjectName`.
#[derive(Debug, Clone)]
pub struct ProjectNameArg(pub ProjectName);

impl FromStr for ProjectNameArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ProjectName::parse(s).map(Self).map_err(|e| e.to_string())
    }
}

impl fmt::Display for ProjectNameArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<ProjectNameArg> for ProjectName {
    fn from(p: ProjectNameArg) -> Self {
        p.0
    }
}

/// Thin wrapper so clap can parse a validated `EntrySymbol`.
#[derive(Debug, Clone, Default)]
pub struct EntrySymbolArg(pub EntrySymbol);

impl FromStr for EntrySymbolArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        EntrySymbol::parse(s).map(Self).map_err(|e| e.to_string())
    }
}

impl fmt::Display for EntrySymbolArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<EntrySymbolArg> for EntrySymbol {
    fn from(s: EntrySymbolArg) -> Self {
        s.0
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let workspace = Workspace::new(cli.root, cli.properties, cli.templates);
    match cli.command {
        Commands::Build(args) => args.run(&workspace),
        Commands::Init(args) => args.run(&workspace),
        Commands::Rename(args) => args.run(&workspace),
        Commands::Generate(args) => args.run(&workspace),
        Commands::Fixup(args) => args.run(&workspace),
        Commands::Diff(args) => args.run(&workspace),
        Commands::Show(args) => args.run(&workspace),
    }
}

/// Logs go to stderr so stdout stays clean for `diff` and `show --json`.
fn init_tracing(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
