//! `docnav nav` command implementation.

use clap::Args;
use docnav_nav::{NavChange, sync_site_config};

use super::project::{Project, ProjectArgs};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    #[command(flatten)]
    pub(crate) project: ProjectArgs,

    /// Report whether the nav would change without writing the file.
    #[arg(long)]
    pub(crate) dry_run: bool,
}

impl NavArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let project = self.project.load()?;
        sync_nav(&project, self.dry_run, output)?;
        Ok(())
    }
}

/// Sync the managed nav group and print the outcome.
pub(super) fn sync_nav(
    project: &Project,
    dry_run: bool,
    output: &Output,
) -> Result<NavChange, CliError> {
    output.info(&format!("Site config: {}", project.site_config.display()));

    let change = sync_site_config(
        &project.site_config,
        project.group(),
        &project.nav_entries(),
        !dry_run,
    )?;

    let group = project.group();
    match (change, dry_run) {
        (NavChange::Unchanged, _) => output.info(&format!("Nav group '{group}' is up to date")),
        (NavChange::Created, true) => output.warning(&format!("Would add nav group '{group}'")),
        (NavChange::Updated, true) => output.warning(&format!("Would update nav group '{group}'")),
        (NavChange::Created, false) => output.success(&format!("Added nav group '{group}'")),
        (NavChange::Updated, false) => output.success(&format!("Updated nav group '{group}'")),
    }

    Ok(change)
}
