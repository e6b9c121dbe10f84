//! Decode command implementation.

use crate::cli::args::DecodeArgs;
use crate::descriptor::decode_artifact_id;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The decode command implementation.
pub struct DecodeCommand {
    args: DecodeArgs,
}

impl DecodeCommand {
    /// Create a new decode command.
    pub fn new(args: DecodeArgs) -> Self {
        Self { args }
    }
}

impl Command for DecodeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let artifact = decode_artifact_id(&self.args.artifact_id);

        if self.args.json {
            let json = serde_json::to_string_pretty(&artifact).map_err(anyhow::Error::from)?;
            ui.output(&json);
        } else {
            ui.output(&format!(
                "name: {}\nversion: {}\n",
                artifact.name,
                artifact.version.as_deref().unwrap_or("(none)")
            ));
        }

        Ok(CommandResult::success())
    }
}
