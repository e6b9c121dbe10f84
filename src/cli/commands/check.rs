//! Check command implementation.
//!
//! The `appdesc check` command reports, per module, which required and
//! optional interfaces the application's provision chain satisfies.

use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::report::{HumanFormatter, JsonFormatter, ReportFormat, ReportFormatter};
use crate::resolver::{report_gaps, resolve_provided_interfaces, GapReport};
use crate::ui::UserInterface;
use crate::workspace::Workspace;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    fn format_output(&self, report: &GapReport, use_color: bool) -> Result<String> {
        let mut output = Vec::new();
        match self.args.format {
            ReportFormat::Json => JsonFormatter::new().format(report, &mut output)?,
            ReportFormat::Human => HumanFormatter::new(use_color).format(report, &mut output)?,
        }
        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let workspace = Workspace::load(&self.project_root)?;
        let app = workspace.require_application(&self.args.app_id)?;
        let provided = resolve_provided_interfaces(app, &workspace.registry())?;
        tracing::debug!("{} provides {} interface(s)", app.id, provided.len());

        let report = report_gaps(app, &provided);
        let output = self.format_output(&report, ui.use_color())?;
        ui.output(&output);

        if !report.is_satisfied() {
            return Ok(CommandResult::failure(1));
        }
        if self.args.strict && report.unsatisfied_optional_count() > 0 {
            return Ok(CommandResult::failure(1));
        }
        Ok(CommandResult::success())
    }
}
