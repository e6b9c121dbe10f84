//! Fetch command implementation.
//!
//! The `appdesc fetch` command searches an Okapi registry and merges the
//! module descriptors it returns into the workspace.

use std::path::{Path, PathBuf};

use crate::cli::args::FetchArgs;
use crate::config::OkapiConfig;
use crate::descriptor::DescriptorKind;
use crate::error::Result;
use crate::remote::OkapiClient;
use crate::ui::UserInterface;
use crate::workspace::Workspace;

use super::dispatcher::{Command, CommandResult};

/// The fetch command implementation.
pub struct FetchCommand {
    project_root: PathBuf,
    args: FetchArgs,
    okapi: OkapiConfig,
}

impl FetchCommand {
    /// Create a new fetch command.
    pub fn new(project_root: &Path, args: FetchArgs, okapi: OkapiConfig) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            okapi,
        }
    }
}

impl Command for FetchCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let client = OkapiClient::from_config(&self.okapi, self.args.url.as_deref())?;
        let found = client.search(self.args.by, &self.args.query)?;

        let kind = DescriptorKind::from(self.args.kind);
        if found.is_empty() {
            ui.warning(&format!("No {} descriptors match '{}'", kind, self.args.query));
            return Ok(CommandResult::success());
        }

        if ui.output_mode().shows_details() {
            for module in &found {
                ui.message(&format!("  {}", module.id));
            }
        }

        let mut workspace = Workspace::load(&self.project_root)?;
        let added = match kind {
            DescriptorKind::UiModule => workspace.add_ui_modules(found),
            _ => workspace.add_modules(found),
        };
        workspace.save(&self.project_root)?;

        ui.success(&format!(
            "Fetched {} {} descriptor(s) from {}",
            added,
            kind,
            client.base_url()
        ));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::ModuleKind;
    use crate::remote::SearchBy;
    use crate::ui::MockUI;
    use httpmock::prelude::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn args(kind: ModuleKind, query: &str, url: String) -> FetchArgs {
        FetchArgs {
            kind,
            query: query.into(),
            by: SearchBy::Id,
            url: Some(url),
        }
    }

    #[test]
    fn stores_fetched_ui_modules() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/_/proxy/modules")
                .query_param("filter", "folio_users");
            then.status(200)
                .json_body(json!([{ "id": "folio_users-10.0.0" }]));
        });
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let cmd = FetchCommand::new(
            temp.path(),
            args(ModuleKind::UiModule, "folio_users", server.base_url()),
            OkapiConfig::default(),
        );
        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("Fetched 1 UI module descriptor(s)"));
        let ws = Workspace::load(temp.path()).unwrap();
        assert_eq!(ws.ids(DescriptorKind::UiModule), vec!["folio_users-10.0.0"]);
        assert!(ws.modules.is_empty());
    }

    #[test]
    fn empty_result_warns_and_keeps_workspace() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/_/proxy/modules");
            then.status(200).json_body(json!([]));
        });
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let cmd = FetchCommand::new(
            temp.path(),
            args(ModuleKind::Module, "nothing", server.base_url()),
            OkapiConfig::default(),
        );
        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_warning("No module descriptors match 'nothing'"));
        assert!(!Workspace::workspace_file(temp.path()).exists());
    }

    #[test]
    fn server_error_is_returned() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/_/proxy/modules");
            then.status(500).body("boom");
        });
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let cmd = FetchCommand::new(
            temp.path(),
            args(ModuleKind::Module, "mod-users", server.base_url()),
            OkapiConfig::default(),
        );

        assert!(cmd.execute(&mut ui).is_err());
    }
}
