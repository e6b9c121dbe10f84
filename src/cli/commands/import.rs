//! Import command implementation.
//!
//! The `appdesc import` command reads descriptor JSON files and merges them
//! into the workspace. Applications also contribute their embedded module
//! descriptors.

use std::path::{Path, PathBuf};

use crate::cli::args::ImportArgs;
use crate::descriptor::{import_files, ApplicationDescriptor, DescriptorKind, ModuleDescriptor};
use crate::error::Result;
use crate::ui::UserInterface;
use crate::workspace::Workspace;

use super::dispatcher::{Command, CommandResult};

/// The import command implementation.
pub struct ImportCommand {
    project_root: PathBuf,
    args: ImportArgs,
}

impl ImportCommand {
    /// Create a new import command.
    pub fn new(project_root: &Path, args: ImportArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for ImportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut workspace = Workspace::load(&self.project_root)?;
        let kind = self.args.kind;

        let (added, warnings) = match kind {
            DescriptorKind::Application => {
                let batch = import_files::<ApplicationDescriptor>(&self.args.files)?;
                (workspace.add_applications(batch.descriptors), batch.warnings)
            }
            DescriptorKind::Module => {
                let batch = import_files::<ModuleDescriptor>(&self.args.files)?;
                (workspace.add_modules(batch.descriptors), batch.warnings)
            }
            DescriptorKind::UiModule => {
                let batch = import_files::<ModuleDescriptor>(&self.args.files)?;
                (workspace.add_ui_modules(batch.descriptors), batch.warnings)
            }
        };

        for warning in &warnings {
            ui.warning(warning);
        }

        workspace.save(&self.project_root)?;
        ui.success(&format!("Imported {} {} descriptor(s)", added, kind));

        if ui.output_mode().shows_details() {
            for id in workspace.ids(kind) {
                ui.message(&format!("  {}", id));
            }
        }

        Ok(CommandResult::success())
    }
}
