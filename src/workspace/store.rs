//! Persistent workspace storage.
//!
//! The workspace keeps every loaded application, backend module and UI
//! module descriptor in `.appdesc/workspace.json` under the project root.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::descriptor::{
    dedupe_by, ApplicationDescriptor, Descriptor, DescriptorKind, ModuleDescriptor,
};
use crate::error::{AppdescError, Result};
use crate::resolver::ApplicationRegistry;

/// Loaded descriptors for a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    /// Schema version for migration.
    pub version: u32,

    /// When the workspace was last written.
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub applications: Vec<ApplicationDescriptor>,

    #[serde(default)]
    pub modules: Vec<ModuleDescriptor>,

    #[serde(default)]
    pub ui_modules: Vec<ModuleDescriptor>,
}

/// Replace existing entries with incoming ones of the same id.
///
/// Incoming values are deduplicated first (first wins) and appended after
/// the untouched existing entries.
fn upsert<T: Descriptor>(existing: &mut Vec<T>, incoming: Vec<T>) -> usize {
    let incoming = dedupe_by(incoming, |d| d.id().to_string());
    existing.retain(|old| !incoming.iter().any(|new| new.id() == old.id()));
    let added = incoming.len();
    existing.extend(incoming);
    added
}

impl Workspace {
    /// Current schema version.
    pub const CURRENT_VERSION: u32 = 1;

    /// Create an empty workspace.
    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            ..Default::default()
        }
    }

    /// Get the workspace file path for a project root.
    pub fn workspace_file(project_root: &Path) -> PathBuf {
        project_root.join(".appdesc").join("workspace.json")
    }

    /// Load the workspace, or an empty one if nothing was saved yet.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = Self::workspace_file(project_root);

        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&path)?;
        let workspace: Self =
            serde_json::from_str(&content).map_err(|e| AppdescError::DescriptorParseError {
                path: path.clone(),
                message: e.to_string(),
            })?;

        tracing::debug!(
            "Loaded workspace with {} applications, {} modules, {} UI modules",
            workspace.applications.len(),
            workspace.modules.len(),
            workspace.ui_modules.len()
        );

        Ok(workspace)
    }

    /// Save the workspace to disk using atomic write.
    pub fn save(&mut self, project_root: &Path) -> Result<()> {
        let path = Self::workspace_file(project_root);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        self.saved_at = Some(Utc::now());
        let content = serde_json::to_string_pretty(self).map_err(anyhow::Error::from)?;

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &path)?;

        Ok(())
    }

    /// Add applications and the module descriptors they embed.
    ///
    /// Returns the number of applications added.
    pub fn add_applications(&mut self, mut applications: Vec<ApplicationDescriptor>) -> usize {
        for app in &mut applications {
            app.fill_module_ref_ids();
        }

        let modules: Vec<ModuleDescriptor> = applications
            .iter()
            .flat_map(|a| a.module_descriptors.iter().cloned())
            .collect();
        let ui_modules: Vec<ModuleDescriptor> = applications
            .iter()
            .flat_map(|a| a.ui_module_descriptors.iter().cloned())
            .collect();

        upsert(&mut self.modules, modules);
        upsert(&mut self.ui_modules, ui_modules);
        upsert(&mut self.applications, applications)
    }

    /// Add backend module descriptors. Returns the number added.
    pub fn add_modules(&mut self, modules: Vec<ModuleDescriptor>) -> usize {
        upsert(&mut self.modules, modules)
    }

    /// Add UI module descriptors. Returns the number added.
    pub fn add_ui_modules(&mut self, modules: Vec<ModuleDescriptor>) -> usize {
        upsert(&mut self.ui_modules, modules)
    }

    /// Remove a descriptor by id. Returns whether anything was removed.
    pub fn remove(&mut self, kind: DescriptorKind, id: &str) -> bool {
        fn remove_from<T: Descriptor>(list: &mut Vec<T>, id: &str) -> bool {
            let before = list.len();
            list.retain(|d| d.id() != id);
            list.len() != before
        }

        match kind {
            DescriptorKind::Application => remove_from(&mut self.applications, id),
            DescriptorKind::Module => remove_from(&mut self.modules, id),
            DescriptorKind::UiModule => remove_from(&mut self.ui_modules, id),
        }
    }

    /// Drop every descriptor.
    pub fn clear(&mut self) {
        self.applications.clear();
        self.modules.clear();
        self.ui_modules.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty() && self.modules.is_empty() && self.ui_modules.is_empty()
    }

    /// Ids of one collection, in stored order.
    pub fn ids(&self, kind: DescriptorKind) -> Vec<&str> {
        match kind {
            DescriptorKind::Application => self.applications.iter().map(|d| d.id()).collect(),
            DescriptorKind::Module => self.modules.iter().map(|d| d.id()).collect(),
            DescriptorKind::UiModule => self.ui_modules.iter().map(|d| d.id()).collect(),
        }
    }

    pub fn application(&self, id: &str) -> Option<&ApplicationDescriptor> {
        self.applications.iter().find(|a| a.id == id)
    }

    /// Like [`Workspace::application`], but a missing id is an error.
    pub fn require_application(&self, id: &str) -> Result<&ApplicationDescriptor> {
        self.application(id)
            .ok_or_else(|| AppdescError::UnknownApplication { id: id.to_string() })
    }

    /// Find a backend or UI module descriptor.
    pub fn module(&self, kind: DescriptorKind, id: &str) -> Option<&ModuleDescriptor> {
        match kind {
            DescriptorKind::Application => None,
            DescriptorKind::Module => self.modules.iter().find(|m| m.id == id),
            DescriptorKind::UiModule => self.ui_modules.iter().find(|m| m.id == id),
        }
    }

    /// Ids of applications that reference a module in their `modules` or
    /// `uiModules` list.
    pub fn applications_using(&self, kind: DescriptorKind, module_id: &str) -> Vec<&str> {
        self.applications
            .iter()
            .filter(|app| {
                let refs = match kind {
                    DescriptorKind::Application => return false,
                    DescriptorKind::Module => &app.modules,
                    DescriptorKind::UiModule => &app.ui_modules,
                };
                refs.iter().any(|r| r.id == module_id)
            })
            .map(|app| app.id.as_str())
            .collect()
    }

    /// Snapshot of the loaded applications for resolution.
    pub fn registry(&self) -> ApplicationRegistry {
        self.applications.iter().cloned().collect()
    }
}
