//! List command implementation.
//!
//! The `appdesc list` command shows the loaded descriptors of one kind.
//! Modules are shown with the applications that use them.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::cli::args::ListArgs;
use crate::descriptor::DescriptorKind;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::workspace::Workspace;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    args: ListArgs,
}

#[derive(Serialize)]
struct ListEntry<'a> {
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    applications: Option<Vec<&'a str>>,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, args: ListArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    fn entries<'a>(&self, workspace: &'a Workspace) -> Vec<ListEntry<'a>> {
        let kind = self.args.kind;
        workspace
            .ids(kind)
            .into_iter()
            .map(|id| ListEntry {
                id,
                applications: match kind {
                    DescriptorKind::Application => None,
                    _ => Some(workspace.applications_using(kind, id)),
                },
            })
            .collect()
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let workspace = Workspace::load(&self.project_root)?;
        let entries = self.entries(&workspace);

        if self.args.json {
            let json = serde_json::to_string_pretty(&entries).map_err(anyhow::Error::from)?;
            ui.output(&json);
            return Ok(CommandResult::success());
        }

        if entries.is_empty() {
            ui.message(&format!("No {} descriptors loaded", self.args.kind));
            return Ok(CommandResult::success());
        }

        let mut text = String::new();
        for entry in &entries {
            match &entry.applications {
                Some(apps) if !apps.is_empty() => {
                    text.push_str(&format!("{}  (used by {})\n", entry.id, apps.join(", ")));
                }
                _ => {
                    text.push_str(entry.id);
                    text.push('\n');
                }
            }
        }
        ui.output(&text);

        Ok(CommandResult::success())
    }
}
