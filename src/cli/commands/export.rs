//! Export command implementation.
//!
//! The `appdesc export` command writes an application descriptor as pretty
//! JSON to stdout or a file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::ExportArgs;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::workspace::Workspace;

use super::dispatcher::{Command, CommandResult};

/// The export command implementation.
pub struct ExportCommand {
    project_root: PathBuf,
    args: ExportArgs,
}

impl ExportCommand {
    /// Create a new export command.
    pub fn new(project_root: &Path, args: ExportArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for ExportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let workspace = Workspace::load(&self.project_root)?;
        let app = workspace.require_application(&self.args.app_id)?;
        let json = serde_json::to_string_pretty(app).map_err(anyhow::Error::from)?;

        match &self.args.output {
            Some(path) => {
                fs::write(path, format!("{}\n", json))?;
                ui.success(&format!("Exported '{}' to {}", app.id, path.display()));
            }
            None => ui.output(&json),
        }

        Ok(CommandResult::success())
    }
}
