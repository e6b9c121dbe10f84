//! appdesc - Application descriptor composition and interface checking.
//!
//! appdesc loads application and module descriptors into a project
//! workspace, composes new application descriptors from them, and checks
//! that every interface a module requires is provided somewhere along the
//! application's dependency chain.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading
//! - [`descriptor`] - Descriptor data model, import and composition
//! - [`error`] - Error types and result aliases
//! - [`interface`] - Interface version parsing and compatibility
//! - [`remote`] - Okapi module search
//! - [`report`] - Gap report formatters
//! - [`resolver`] - Transitive provision and requirement gaps
//! - [`ui`] - Terminal output
//! - [`workspace`] - Persistent descriptor storage
//!
//! # Example
//!
//! ```
//! use appdesc::{decode_artifact_id, is_compatible};
//!
//! assert!(is_compatible("users", "16.1", "users", "15.0 16.0"));
//! assert!(!is_compatible("users", "16.0", "users", "16.1"));
//!
//! let artifact = decode_artifact_id("mod-users-19.1.0");
//! assert_eq!(artifact.name, "mod-users");
//! assert_eq!(artifact.version.as_deref(), Some("19.1.0"));
//! ```

pub mod cli;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod interface;
pub mod remote;
pub mod report;
pub mod resolver;
pub mod ui;
pub mod workspace;

pub use descriptor::{decode_artifact_id, dedupe_by};
pub use error::{AppdescError, Result};
pub use interface::is_compatible;
pub use resolver::{report_gaps, resolve_provided_interfaces, CircularDependencyError};
