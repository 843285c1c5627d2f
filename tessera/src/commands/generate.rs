use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{ProjectArgs, UnwrapOrExit};
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output file (overrides tessera.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview the generated document without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let project = self.project.load();
        let tree = project.tree().unwrap_or_exit();
        let output = self.output.clone().unwrap_or_else(|| project.output());

        let report = ops::generate(
            &project,
            &tree,
            GenerateOptions {
                output: &output,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
