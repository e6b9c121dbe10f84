//! Compat command implementation.

use crate::cli::args::CompatArgs;
use crate::error::Result;
use crate::interface::compare;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The compat command implementation.
pub struct CompatCommand {
    args: CompatArgs,
}

impl CompatCommand {
    /// Create a new compat command.
    pub fn new(args: CompatArgs) -> Self {
        Self { args }
    }
}

impl Command for CompatCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let args = &self.args;
        let grade = compare(
            &args.provided_id,
            &args.provided_version,
            &args.required_id,
            &args.required_expr,
        );
        ui.output(&grade.to_string());

        if grade.is_compatible() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
