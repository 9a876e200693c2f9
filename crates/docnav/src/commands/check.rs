//! `docnav check` command implementation.

use clap::Args;
use docnav_nav::SiteConfig;
use docnav_sections::plan_sections;

use super::project::ProjectArgs;
use super::scaffold::print_scaffold_report;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub(crate) project: ProjectArgs,
}

impl CheckArgs {
    /// Report drift without writing. Fails when anything is out of date.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let project = self.project.load()?;
        let group = project.group();

        let report = plan_sections(&project.layout, &project.sections)?;
        print_scaffold_report(&project, &report, true, output);

        let expected = project.nav_entries();
        let mut site = SiteConfig::load(&project.site_config)?;
        let current = site.group_entries(group);
        let nav_change = site.sync_group(group, &expected)?;

        if nav_change.is_changed() {
            output.warning(&format!("Nav group '{group}' is out of date"));
            match current {
                Some(current) => {
                    for entry in &current {
                        output.detail(&format!("- {}: {}", entry.title, entry.target));
                    }
                }
                None => output.detail("(missing)"),
            }
            output.info("Expected:");
            for entry in &expected {
                output.detail(&format!("+ {}: {}", entry.title, entry.target));
            }
        } else {
            output.info(&format!("Nav group '{group}' is up to date"));
        }

        if report.is_up_to_date() && !nav_change.is_changed() {
            output.success("Everything is up to date");
            return Ok(());
        }

        Err(CliError::OutOfDate(
            "documentation structure is out of date, run `docnav sync`".to_owned(),
        ))
    }
}
