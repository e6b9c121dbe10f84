//! Building application descriptors from loaded descriptors.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{AppdescError, Result};
use crate::workspace::Workspace;

use super::{decode_artifact_id, ApplicationDescriptor, ApplicationRef, ModuleDescriptor};

static SEMVER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d+)\.(\d+)\.(\d+)(?:-([\dA-Za-z-]+(?:\.[\dA-Za-z-]+)*))?(?:\+[\dA-Za-z-]+)?$",
    )
    .expect("semver pattern is valid")
});

/// Whether `version` is a `MAJOR.MINOR.PATCH[-pre][+build]` version.
pub fn is_semver(version: &str) -> bool {
    SEMVER.is_match(version)
}

/// The user-supplied parts of a new application descriptor.
#[derive(Debug, Clone, Default)]
pub struct ApplicationDraft {
    pub name: String,
    pub version: String,
    pub description: Option<String>,
    pub platform: Option<String>,
    /// Ids of applications this one depends on.
    pub dependencies: Vec<String>,
    /// Ids of backend module descriptors.
    pub module_ids: Vec<String>,
    /// Ids of UI module descriptors.
    pub ui_module_ids: Vec<String>,
}

/// Look up descriptors by id, dropping ids that are not loaded.
fn select<'a, T, F>(ids: &[String], lookup: F, what: &str) -> Vec<&'a T>
where
    F: Fn(&str) -> Option<&'a T>,
{
    ids.iter()
        .filter_map(|id| {
            let found = lookup(id.as_str());
            if found.is_none() {
                tracing::warn!("Ignoring unknown {} '{}'", what, id);
            }
            found
        })
        .collect()
}

impl ApplicationDraft {
    /// The id the composed application will get: `name-version`.
    pub fn id(&self) -> String {
        format!("{}-{}", self.name, self.version)
    }

    /// Resolve the draft against a workspace.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDescriptor` if the name is empty or the version is not
    /// a semantic version.
    pub fn compose(&self, workspace: &Workspace) -> Result<ApplicationDescriptor> {
        if self.name.trim().is_empty() {
            return Err(AppdescError::InvalidDescriptor {
                message: "Application name is required".to_string(),
            });
        }
        if !is_semver(&self.version) {
            return Err(AppdescError::InvalidDescriptor {
                message: format!(
                    "Application version must be in semVer format, got '{}'",
                    self.version
                ),
            });
        }

        let id = self.id();

        let dependencies: Vec<ApplicationRef> =
            select(&self.dependencies, |dep| workspace.application(dep), "application")
                .into_iter()
                .filter(|dep| dep.id != id)
                .map(|dep| ApplicationRef {
                    id: dep.id.clone(),
                    name: Some(dep.name.clone()),
                    version: Some(dep.version.clone()),
                })
                .collect();

        let modules: Vec<ModuleDescriptor> = select(
            &self.module_ids,
            |m| workspace.modules.iter().find(|d| d.id == m),
            "module",
        )
        .into_iter()
        .cloned()
        .collect();
        let ui_modules: Vec<ModuleDescriptor> = select(
            &self.ui_module_ids,
            |m| workspace.ui_modules.iter().find(|d| d.id == m),
            "UI module",
        )
        .into_iter()
        .cloned()
        .collect();

        let mut app = ApplicationDescriptor::new(id);
        app.name = self.name.clone();
        app.version = self.version.clone();
        app.description = self.description.clone();
        app.platform = self.platform.clone();
        app.dependencies = dependencies;
        app.modules = modules.iter().map(|m| decode_artifact_id(&m.id)).collect();
        app.ui_modules = ui_modules.iter().map(|m| decode_artifact_id(&m.id)).collect();
        app.module_descriptors = modules;
        app.ui_module_descriptors = ui_modules;

        Ok(app)
    }
}
