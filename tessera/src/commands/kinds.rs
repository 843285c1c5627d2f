use clap::Args;
use eyre::Result;

use super::ProjectArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct KindsCommand {
    #[command(flatten)]
    pub project: ProjectArgs,
}

impl KindsCommand {
    /// Run the kinds command
    pub fn run(&self) -> Result<()> {
        let project = self.project.load();
        ops::kinds(&project).render(&mut TerminalOutput::new());
        Ok(())
    }
}
