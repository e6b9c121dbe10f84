//! Descriptor data model.
//!
//! Field names follow the JSON documents exchanged with module registries
//! (`moduleDescriptors`, `interfaceType`, ...). Fields this crate does not
//! read are kept in `extra` so that descriptors survive a round trip through
//! the workspace unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::artifact::{decode_artifact_id, ArtifactId};

/// Interface type that is never accumulated as a transitive provision.
pub const SYSTEM_INTERFACE_TYPE: &str = "system";

/// A reference to a versioned interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceRef {
    pub id: String,

    /// One or more whitespace-separated version tokens.
    #[serde(default)]
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface_type: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InterfaceRef {
    /// Create an interface reference with no type.
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
            interface_type: None,
            extra: Map::new(),
        }
    }

    /// Set the interface type.
    pub fn with_type(mut self, interface_type: impl Into<String>) -> Self {
        self.interface_type = Some(interface_type.into());
        self
    }

    /// Whether this is a system interface.
    pub fn is_system(&self) -> bool {
        self.interface_type.as_deref() == Some(SYSTEM_INTERFACE_TYPE)
    }

    /// Display label, also used as the deduplication key: `id-version`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.id, self.version)
    }
}

/// A backend or UI module descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDescriptor {
    /// Conventionally `name-version`.
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provides: Vec<InterfaceRef>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<InterfaceRef>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub optional: Vec<InterfaceRef>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ModuleDescriptor {
    /// Create an empty module descriptor.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            description: None,
            provides: Vec::new(),
            requires: Vec::new(),
            optional: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn with_provides(mut self, provides: Vec<InterfaceRef>) -> Self {
        self.provides = provides;
        self
    }

    pub fn with_requires(mut self, requires: Vec<InterfaceRef>) -> Self {
        self.requires = requires;
        self
    }

    pub fn with_optional(mut self, optional: Vec<InterfaceRef>) -> Self {
        self.optional = optional;
        self
    }
}

/// A reference from one application to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRef {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ApplicationRef {
    /// Reference an application by id only.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            version: None,
        }
    }
}

/// An application assembled from modules and other applications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDescriptor {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    #[serde(default)]
    pub dependencies: Vec<ApplicationRef>,

    /// Compact references to the backend modules.
    #[serde(default)]
    pub modules: Vec<ArtifactId>,

    /// Compact references to the UI modules.
    #[serde(default)]
    pub ui_modules: Vec<ArtifactId>,

    #[serde(default)]
    pub module_descriptors: Vec<ModuleDescriptor>,

    #[serde(default)]
    pub ui_module_descriptors: Vec<ModuleDescriptor>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ApplicationDescriptor {
    /// Create an empty application descriptor.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            version: String::new(),
            description: None,
            platform: None,
            dependencies: Vec::new(),
            modules: Vec::new(),
            ui_modules: Vec::new(),
            module_descriptors: Vec::new(),
            ui_module_descriptors: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn with_dependencies(mut self, ids: &[&str]) -> Self {
        self.dependencies = ids.iter().map(|id| ApplicationRef::new(*id)).collect();
        self
    }

    pub fn with_modules(mut self, modules: Vec<ModuleDescriptor>) -> Self {
        self.module_descriptors = modules;
        self
    }

    pub fn with_ui_modules(mut self, modules: Vec<ModuleDescriptor>) -> Self {
        self.ui_module_descriptors = modules;
        self
    }

    /// Complete module references: set `id = name-version` where the id is
    /// missing, and decode name and version from the id where the name is.
    pub fn fill_module_ref_ids(&mut self) {
        for module in self.modules.iter_mut().chain(self.ui_modules.iter_mut()) {
            if module.id.is_empty() {
                module.id = match &module.version {
                    Some(version) => format!("{}-{}", module.name, version),
                    None => module.name.clone(),
                };
            } else if module.name.is_empty() {
                let decoded = decode_artifact_id(&module.id);
                module.name = decoded.name;
                if module.version.is_none() {
                    module.version = decoded.version;
                }
            }
        }
    }

    /// Ids of every embedded backend and UI module descriptor.
    pub fn module_ids(&self) -> impl Iterator<Item = &str> {
        self.module_descriptors
            .iter()
            .chain(self.ui_module_descriptors.iter())
            .map(|m| m.id.as_str())
    }
}
