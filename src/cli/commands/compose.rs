//! Compose command implementation.
//!
//! The `appdesc compose` command builds an application descriptor from
//! loaded applications and module descriptors and stores it.

use std::path::{Path, PathBuf};

use crate::cli::args::ComposeArgs;
use crate::descriptor::ApplicationDraft;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::workspace::Workspace;

use super::dispatcher::{Command, CommandResult};

/// The compose command implementation.
pub struct ComposeCommand {
    project_root: PathBuf,
    args: ComposeArgs,
}

impl ComposeCommand {
    /// Create a new compose command.
    pub fn new(project_root: &Path, args: ComposeArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    fn draft(&self) -> ApplicationDraft {
        ApplicationDraft {
            name: self.args.name.clone(),
            version: self.args.app_version.clone(),
            description: self.args.description.clone(),
            platform: self.args.platform.clone(),
            dependencies: self.args.dependencies.clone(),
            module_ids: self.args.modules.clone(),
            ui_module_ids: self.args.ui_modules.clone(),
        }
    }
}

impl Command for ComposeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut workspace = Workspace::load(&self.project_root)?;
        let app = self.draft().compose(&workspace)?;

        if workspace.application(&app.id).is_some() {
            ui.warning(&format!("Replacing application '{}'", app.id));
        }

        let requested =
            self.args.dependencies.len() + self.args.modules.len() + self.args.ui_modules.len();
        let selected = app.dependencies.len() + app.modules.len() + app.ui_modules.len();
        if selected < requested {
            ui.warning(&format!("{} unknown id(s) were left out", requested - selected));
        }

        if ui.output_mode().shows_details() {
            for dependency in &app.dependencies {
                ui.message(&format!("  depends on {}", dependency.id));
            }
            for module_id in app.module_ids() {
                ui.message(&format!("  includes {}", module_id));
            }
        }

        let id = app.id.clone();
        workspace.add_applications(vec![app]);
        workspace.save(&self.project_root)?;

        ui.success(&format!("Composed application '{}'", id));
        Ok(CommandResult::success())
    }
}
