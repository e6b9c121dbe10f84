//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, AppdescConfig};
use crate::error::Result;
use crate::ui::{OutputMode, UserInterface};

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// The code to hand to the process. Codes outside `0..=255` become 1.
    pub fn process_exit_code(&self) -> u8 {
        u8::try_from(self.exit_code).unwrap_or(1)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load the project configuration and apply its output settings.
    ///
    /// The configured default output only applies when no CLI flag changed
    /// the mode.
    fn load_config(&self, ui: &mut dyn UserInterface) -> Result<AppdescConfig> {
        let config = load_config(&self.project_root)?;
        if ui.output_mode() == OutputMode::Normal {
            ui.set_output_mode(config.settings.default_output.into());
        }
        Ok(config)
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = &self.project_root;

        // These never touch the project.
        match &cli.command {
            Commands::Compat(args) => {
                return super::compat::CompatCommand::new(args.clone()).execute(ui);
            }
            Commands::Decode(args) => {
                return super::decode::DecodeCommand::new(args.clone()).execute(ui);
            }
            Commands::Completions(args) => {
                return super::completions::CompletionsCommand::new(args.clone()).execute(ui);
            }
            _ => {}
        }

        let config = self.load_config(ui)?;

        match &cli.command {
            Commands::Import(args) => {
                super::import::ImportCommand::new(root, args.clone()).execute(ui)
            }
            Commands::Fetch(args) => {
                super::fetch::FetchCommand::new(root, args.clone(), config.okapi).execute(ui)
            }
            Commands::List(args) => super::list::ListCommand::new(root, args.clone()).execute(ui),
            Commands::Remove(args) => {
                super::remove::RemoveCommand::new(root, args.clone()).execute(ui)
            }
            Commands::Clear => super::clear::ClearCommand::new(root).execute(ui),
            Commands::Compose(args) => {
                super::compose::ComposeCommand::new(root, args.clone()).execute(ui)
            }
            Commands::Provided(args) => {
                super::provided::ProvidedCommand::new(root, args.clone()).execute(ui)
            }
            Commands::Check(args) => {
                super::check::CheckCommand::new(root, args.clone()).execute(ui)
            }
            Commands::Export(args) => {
                super::export::ExportCommand::new(root, args.clone()).execute(ui)
            }
            Commands::Compat(_) | Commands::Decode(_) | Commands::Completions(_) => {
                Ok(CommandResult::success())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn process_exit_code_clamps_out_of_range() {
        assert_eq!(CommandResult::success().process_exit_code(), 0);
        assert_eq!(CommandResult::failure(2).process_exit_code(), 2);
        assert_eq!(CommandResult::failure(256).process_exit_code(), 1);
        assert_eq!(CommandResult::failure(-1).process_exit_code(), 1);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"));
        assert_eq!(dispatcher.project_root(), Path::new("/test"));
    }

    #[test]
    fn applies_configured_output_mode() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".appdesc")).unwrap();
        fs::write(
            temp.path().join(".appdesc/config.yml"),
            "settings:\n  default_output: quiet\n",
        )
        .unwrap();
        let cli = Cli::parse_from(["appdesc", "list", "module"]);
        let mut ui = MockUI::new();

        CommandDispatcher::new(temp.path().to_path_buf())
            .dispatch(&cli, &mut ui)
            .unwrap();

        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn explicit_mode_wins_over_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".appdesc")).unwrap();
        fs::write(
            temp.path().join(".appdesc/config.yml"),
            "settings:\n  default_output: quiet\n",
        )
        .unwrap();
        let cli = Cli::parse_from(["appdesc", "list", "module"]);
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        CommandDispatcher::new(temp.path().to_path_buf())
            .dispatch(&cli, &mut ui)
            .unwrap();

        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
