//! Application and module descriptors.
//!
//! This module provides:
//! - [`schema`] - Descriptor data model
//! - [`artifact`] - `name-version` identifier codec
//! - [`dedupe`] - First-occurrence-wins deduplication
//! - [`import`] - Descriptor file import and validation
//! - [`compose`] - Building application descriptors from loaded modules

pub mod artifact;
pub mod compose;
pub mod dedupe;
pub mod import;
pub mod schema;

pub use artifact::{decode_artifact_id, ArtifactId};
pub use compose::ApplicationDraft;
pub use dedupe::dedupe_by;
pub use import::{import_files, parse_descriptor_document, ImportBatch};
pub use schema::{
    ApplicationDescriptor, ApplicationRef, InterfaceRef, ModuleDescriptor, SYSTEM_INTERFACE_TYPE,
};

use serde::Serialize;
use std::fmt;

/// Anything identified by a descriptor id.
pub trait Descriptor {
    fn id(&self) -> &str;
}

impl Descriptor for ModuleDescriptor {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Descriptor for ApplicationDescriptor {
    fn id(&self) -> &str {
        &self.id
    }
}

/// The three descriptor collections a workspace holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DescriptorKind {
    Application,
    Module,
    UiModule,
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Application => "application",
            Self::Module => "module",
            Self::UiModule => "UI module",
        };
        f.write_str(text)
    }
}
