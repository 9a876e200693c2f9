//! `docnav sync` command implementation.

use clap::Args;

use super::nav::sync_nav;
use super::project::ProjectArgs;
use super::scaffold::scaffold_sections;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sync command.
#[derive(Args)]
pub(crate) struct SyncArgs {
    #[command(flatten)]
    pub(crate) project: ProjectArgs,

    /// Report what would change without writing anything.
    #[arg(long)]
    pub(crate) dry_run: bool,
}

impl SyncArgs {
    /// Scaffold section folders, then rewrite the managed nav group.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let project = self.project.load()?;

        scaffold_sections(&project, self.dry_run, output)?;
        sync_nav(&project, self.dry_run, output)?;

        if !self.dry_run {
            output.success("Folders and navigation updated");
        }
        Ok(())
    }
}
