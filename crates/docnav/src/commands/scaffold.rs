//! `docnav scaffold` command implementation.

use clap::Args;
use docnav_sections::{ScaffoldReport, ensure_sections, plan_sections};

use super::project::{Project, ProjectArgs};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the scaffold command.
#[derive(Args)]
pub(crate) struct ScaffoldArgs {
    #[command(flatten)]
    pub(crate) project: ProjectArgs,

    /// Report what would be created without writing anything.
    #[arg(long)]
    pub(crate) dry_run: bool,
}

impl ScaffoldArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let project = self.project.load()?;
        scaffold_sections(&project, self.dry_run, output)?;
        Ok(())
    }
}

/// Create (or plan) section folders and print what changed.
pub(super) fn scaffold_sections(
    project: &Project,
    dry_run: bool,
    output: &Output,
) -> Result<ScaffoldReport, CliError> {
    output.info(&format!(
        "Sections: {}",
        project.layout.group_dir().display()
    ));

    let report = if dry_run {
        plan_sections(&project.layout, &project.sections)?
    } else {
        ensure_sections(&project.layout, &project.sections)?
    };

    print_scaffold_report(project, &report, dry_run, output);
    Ok(report)
}

/// Print per-path lines and a summary for a scaffold report.
pub(super) fn print_scaffold_report(
    project: &Project,
    report: &ScaffoldReport,
    dry_run: bool,
    output: &Output,
) {
    let verb = if dry_run { "would create" } else { "created" };

    for (section, status) in project.sections.iter().zip(&report.sections) {
        if status.dir_created {
            output.detail(&format!(
                "{verb} {}",
                project.layout.section_dir(section).display()
            ));
        }
        if status.placeholder_created {
            output.detail(&format!(
                "{verb} {}",
                project.layout.placeholder_path(section).display()
            ));
        }
    }

    if report.is_up_to_date() {
        output.info("Section folders are up to date");
    } else if dry_run {
        output.warning(&format!(
            "Would create {} folder(s) and {} placeholder(s)",
            report.created_dirs(),
            report.created_placeholders()
        ));
    } else {
        output.success(&format!(
            "Created {} folder(s) and {} placeholder(s)",
            report.created_dirs(),
            report.created_placeholders()
        ));
    }
}
