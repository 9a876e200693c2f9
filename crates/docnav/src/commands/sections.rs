//! `docnav sections` command implementation.

use clap::Args;

use super::project::ProjectArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sections command.
#[derive(Args)]
pub(crate) struct SectionsArgs {
    #[command(flatten)]
    pub(crate) project: ProjectArgs,
}

impl SectionsArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let project = self.project.load()?;

        output.highlight(&format!(
            "{} ({})",
            project.group(),
            project.layout.group_dir().display()
        ));
        for (index, (section, entry)) in project
            .sections
            .iter()
            .zip(project.nav_entries())
            .enumerate()
        {
            output.info(&format!(
                "{:>2}. {} [{}]",
                index + 1,
                section.title,
                section.key
            ));
            output.detail(&entry.target);
        }
        Ok(())
    }
}
