mod check;
mod completions;
mod generate;
mod kinds;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use kinds::KindsCommand;
use tessera_manifest::CONFIG_FILE;

use crate::ops::Project;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for tessera_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Where to find the configuration, type tree and templates.
#[derive(Args, Debug, Clone)]
pub(crate) struct ProjectArgs {
    /// Path to tessera.toml (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Type tree file (overrides tessera.toml)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Template directory (overrides tessera.toml)
    #[arg(short, long)]
    pub templates: Option<PathBuf>,
}

impl ProjectArgs {
    /// Load the project, exiting with a report on configuration errors.
    pub fn load(&self) -> Project {
        Project::load(self).unwrap_or_exit()
    }
}

#[derive(Parser)]
#[command(name = "tessera")]
#[command(version)]
#[command(about = "Generate source files from a type tree and text templates")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Kinds(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render the type tree and write the generated document
    Generate(GenerateCommand),

    /// Parse the type tree and report skipped nodes without writing anything
    Check(CheckCommand),

    /// List registered classifications and their templates
    Kinds(KindsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
