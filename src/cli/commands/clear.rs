//! Clear command implementation.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::ui::UserInterface;
use crate::workspace::Workspace;

use super::dispatcher::{Command, CommandResult};

/// The clear command implementation.
pub struct ClearCommand {
    project_root: PathBuf,
}

impl ClearCommand {
    /// Create a new clear command.
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
        }
    }
}

impl Command for ClearCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut workspace = Workspace::load(&self.project_root)?;
        workspace.clear();
        workspace.save(&self.project_root)?;
        ui.success("Workspace cleared");
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ModuleDescriptor;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn empties_workspace() {
        let temp = TempDir::new().unwrap();
        let mut ws = Workspace::new();
        ws.add_ui_modules(vec![ModuleDescriptor::new("folio_users-10.0.0")]);
        ws.save(temp.path()).unwrap();
        let mut ui = MockUI::new();

        ClearCommand::new(temp.path()).execute(&mut ui).unwrap();

        assert!(Workspace::load(temp.path()).unwrap().is_empty());
        assert!(ui.has_success("Workspace cleared"));
    }
}
