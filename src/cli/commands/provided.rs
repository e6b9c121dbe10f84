//! Provided command implementation.
//!
//! The `appdesc provided` command prints every interface an application
//! provides through its own modules and its dependency chain.

use std::path::{Path, PathBuf};

use crate::cli::args::ProvidedArgs;
use crate::error::Result;
use crate::resolver::resolve_provided_interfaces;
use crate::ui::UserInterface;
use crate::workspace::Workspace;

use super::dispatcher::{Command, CommandResult};

/// The provided command implementation.
pub struct ProvidedCommand {
    project_root: PathBuf,
    args: ProvidedArgs,
}

impl ProvidedCommand {
    /// Create a new provided command.
    pub fn new(project_root: &Path, args: ProvidedArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for ProvidedCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let workspace = Workspace::load(&self.project_root)?;
        let app = workspace.require_application(&self.args.app_id)?;
        let provided = resolve_provided_interfaces(app, &workspace.registry())?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&provided).map_err(anyhow::Error::from)?;
            ui.output(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!("Interfaces provided by {}", app.id));
        if provided.is_empty() {
            ui.message("No interfaces provided");
            return Ok(CommandResult::success());
        }

        let text: String = provided
            .iter()
            .map(|p| format!("{} {}\n", p.id, p.version))
            .collect();
        ui.output(&text);

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{ApplicationDescriptor, InterfaceRef, ModuleDescriptor};
    use crate::error::AppdescError;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn provided(temp: &TempDir, app_id: &str, json: bool) -> (Result<CommandResult>, MockUI) {
        let mut ui = MockUI::new();
        let args = ProvidedArgs {
            app_id: app_id.into(),
            json,
        };
        let result = ProvidedCommand::new(temp.path(), args).execute(&mut ui);
        (result, ui)
    }

    fn save(temp: &TempDir, apps: Vec<ApplicationDescriptor>) {
        let mut ws = Workspace::new();
        ws.add_applications(apps);
        ws.save(temp.path()).unwrap();
    }

    #[test]
    fn prints_transitive_interfaces() {
        let temp = TempDir::new().unwrap();
        save(
            &temp,
            vec![
                ApplicationDescriptor::new("base-1.0.0").with_modules(vec![ModuleDescriptor::new(
                    "mod-users-19.0.0",
                )
                .with_provides(vec![InterfaceRef::new("users", "16.1")])]),
                ApplicationDescriptor::new("app-1.0.0")
                    .with_dependencies(&["base-1.0.0"])
                    .with_modules(vec![ModuleDescriptor::new("mod-notes-1.0.0")
                        .with_provides(vec![InterfaceRef::new("notes", "2.0")])]),
            ],
        );

        let (result, ui) = provided(&temp, "app-1.0.0", false);

        assert!(result.unwrap().success);
        assert_eq!(ui.output_text(), "notes 2.0\nusers 16.1\n");
    }

    #[test]
    fn prints_json() {
        let temp = TempDir::new().unwrap();
        save(
            &temp,
            vec![ApplicationDescriptor::new("app-1.0.0").with_modules(vec![
                ModuleDescriptor::new("mod-a-1.0.0")
                    .with_provides(vec![InterfaceRef::new("a", "1.0")]),
            ])],
        );

        let (_, ui) = provided(&temp, "app-1.0.0", true);

        let value: serde_json::Value = serde_json::from_str(&ui.output_text()).unwrap();
        assert_eq!(value[0]["id"], "a");
        assert_eq!(value[0]["version"], "1.0");
    }

    #[test]
    fn cycle_is_an_error() {
        let temp = TempDir::new().unwrap();
        save(
            &temp,
            vec![
                ApplicationDescriptor::new("a-1.0.0").with_dependencies(&["b-1.0.0"]),
                ApplicationDescriptor::new("b-1.0.0").with_dependencies(&["a-1.0.0"]),
            ],
        );

        let (result, _) = provided(&temp, "a-1.0.0", false);

        match result {
            Err(AppdescError::CircularDependency(err)) => {
                assert_eq!(err.path, vec!["a-1.0.0", "b-1.0.0", "a-1.0.0"]);
            }
            other => panic!("unexpected result: {:?}", other.map(|r| r.exit_code)),
        }
    }

    #[test]
    fn unknown_application_is_an_error() {
        let temp = TempDir::new().unwrap();
        let (result, _) = provided(&temp, "nope-1.0.0", false);
        assert!(matches!(result, Err(AppdescError::UnknownApplication { .. })));
    }
}
