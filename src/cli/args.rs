//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::descriptor::DescriptorKind;
use crate::remote::SearchBy;
use crate::report::ReportFormat;

/// appdesc - Compose application descriptors and check interface compatibility.
#[derive(Debug, Parser)]
#[command(name = "appdesc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Import descriptor files into the workspace
    Import(ImportArgs),

    /// Search an Okapi registry and add the found module descriptors
    Fetch(FetchArgs),

    /// List loaded descriptors
    List(ListArgs),

    /// Remove one descriptor from the workspace
    Remove(RemoveArgs),

    /// Remove every descriptor from the workspace
    Clear,

    /// Compose a new application descriptor from loaded descriptors
    Compose(ComposeArgs),

    /// Show the interfaces an application provides, including dependencies
    Provided(ProvidedArgs),

    /// Check that every module requirement of an application is satisfied
    Check(CheckArgs),

    /// Compare a provided interface version with a requirement
    Compat(CompatArgs),

    /// Split an artifact id into name and version
    Decode(DecodeArgs),

    /// Write an application descriptor as JSON
    Export(ExportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Module descriptor collections that can be fetched remotely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ModuleKind {
    #[default]
    Module,
    UiModule,
}

impl From<ModuleKind> for DescriptorKind {
    fn from(kind: ModuleKind) -> Self {
        match kind {
            ModuleKind::Module => DescriptorKind::Module,
            ModuleKind::UiModule => DescriptorKind::UiModule,
        }
    }
}

/// Arguments for the `import` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ImportArgs {
    /// Kind of descriptor the files contain
    #[arg(value_enum)]
    pub kind: DescriptorKind,

    /// Descriptor JSON files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Arguments for the `fetch` command.
#[derive(Debug, Clone, clap::Args)]
pub struct FetchArgs {
    /// Collection to add the found descriptors to
    #[arg(value_enum)]
    pub kind: ModuleKind,

    /// Search text
    pub query: String,

    /// What the query matches against
    #[arg(long, value_enum, default_value = "id")]
    pub by: SearchBy,

    /// Okapi base URL (overrides okapi.url)
    #[arg(long, env = "APPDESC_OKAPI_URL")]
    pub url: Option<String>,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ListArgs {
    /// Kind of descriptor to list
    #[arg(value_enum)]
    pub kind: DescriptorKind,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `remove` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RemoveArgs {
    /// Kind of descriptor to remove
    #[arg(value_enum)]
    pub kind: DescriptorKind,

    /// Descriptor id
    pub id: String,
}

/// Arguments for the `compose` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ComposeArgs {
    /// Application name
    #[arg(long)]
    pub name: String,

    /// Application version (MAJOR.MINOR.PATCH)
    #[arg(long = "version", value_name = "VERSION")]
    pub app_version: String,

    /// Application description
    #[arg(long)]
    pub description: Option<String>,

    /// Target platform
    #[arg(long)]
    pub platform: Option<String>,

    /// Id of an application this one depends on (repeatable)
    #[arg(long = "dependency", value_name = "APP_ID")]
    pub dependencies: Vec<String>,

    /// Id of a backend module descriptor (repeatable)
    #[arg(long = "module", value_name = "MODULE_ID")]
    pub modules: Vec<String>,

    /// Id of a UI module descriptor (repeatable)
    #[arg(long = "ui-module", value_name = "MODULE_ID")]
    pub ui_modules: Vec<String>,
}

/// Arguments for the `provided` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ProvidedArgs {
    /// Application id
    pub app_id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Application id
    pub app_id: String,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: ReportFormat,

    /// Also fail when optional interfaces are not provided
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `compat` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompatArgs {
    /// Provided interface id
    pub provided_id: String,

    /// Provided interface version, e.g. `16.1`
    pub provided_version: String,

    /// Required interface id
    pub required_id: String,

    /// Required version alternatives, e.g. `"15.0 16.0"`
    pub required_expr: String,
}

/// Arguments for the `decode` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DecodeArgs {
    /// Artifact id, e.g. `mod-users-19.1.0`
    pub artifact_id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `export` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ExportArgs {
    /// Application id
    pub app_id: String,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
