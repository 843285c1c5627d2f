use clap::Args;
use eyre::Result;

use super::{ProjectArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print the normalized type tree as JSON
    #[arg(long)]
    pub dump: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let project = self.project.load();
        let tree = project.tree().unwrap_or_exit();

        let report = ops::check(&project, &tree, self.dump)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
