//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! dispatched via [`CommandDispatcher`].

pub mod check;
pub mod clear;
pub mod compat;
pub mod completions;
pub mod compose;
pub mod decode;
pub mod dispatcher;
pub mod export;
pub mod fetch;
pub mod import;
pub mod list;
pub mod provided;
pub mod remove;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
