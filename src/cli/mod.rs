//! Command-line interface for appdesc.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    CheckArgs, Cli, Commands, CompatArgs, ComposeArgs, DecodeArgs, ExportArgs, FetchArgs,
    ImportArgs, ListArgs, ModuleKind, ProvidedArgs, RemoveArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
