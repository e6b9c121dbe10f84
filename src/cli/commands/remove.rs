//! Remove command implementation.

use std::path::{Path, PathBuf};

use crate::cli::args::RemoveArgs;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::workspace::Workspace;

use super::dispatcher::{Command, CommandResult};

/// The remove command implementation.
pub struct RemoveCommand {
    project_root: PathBuf,
    args: RemoveArgs,
}

impl RemoveCommand {
    /// Create a new remove command.
    pub fn new(project_root: &Path, args: RemoveArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for RemoveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut workspace = Workspace::load(&self.project_root)?;

        if !workspace.remove(self.args.kind, &self.args.id) {
            ui.error(&format!("No {} '{}' is loaded", self.args.kind, self.args.id));
            return Ok(CommandResult::failure(1));
        }

        workspace.save(&self.project_root)?;
        ui.success(&format!("Removed {} '{}'", self.args.kind, self.args.id));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{DescriptorKind, ModuleDescriptor};
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn remove(temp: &TempDir, id: &str, ui: &mut MockUI) -> CommandResult {
        let args = RemoveArgs {
            kind: DescriptorKind::Module,
            id: id.into(),
        };
        RemoveCommand::new(temp.path(), args).execute(ui).unwrap()
    }

    #[test]
    fn removes_loaded_descriptor() {
        let temp = TempDir::new().unwrap();
        let mut ws = Workspace::new();
        ws.add_modules(vec![
            ModuleDescriptor::new("mod-a-1.0.0"),
            ModuleDescriptor::new("mod-b-1.0.0"),
        ]);
        ws.save(temp.path()).unwrap();
        let mut ui = MockUI::new();

        let result = remove(&temp, "mod-a-1.0.0", &mut ui);

        assert!(result.success);
        let ws = Workspace::load(temp.path()).unwrap();
        assert_eq!(ws.ids(DescriptorKind::Module), vec!["mod-b-1.0.0"]);
    }

    #[test]
    fn unknown_id_fails() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = remove(&temp, "mod-x-1.0.0", &mut ui);

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("No module 'mod-x-1.0.0' is loaded"));
    }
}
