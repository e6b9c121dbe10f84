//! Configuration loading for appdesc.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Configuration File Locations
//!
//! 1. Project config (`.appdesc/config.yml`)
//! 2. Local overrides (`.appdesc/config.local.yml`)

pub mod loader;
pub mod schema;

pub use loader::{find_project_root, load_config, load_config_value, ConfigPaths};
pub use schema::{
    AppdescConfig, AuthConfig, OkapiConfig, OutputMode, Settings, DEFAULT_TIMEOUT_SECS,
};
