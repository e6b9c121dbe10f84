//! Configuration file discovery and loading.
//!
//! The project config lives at `.appdesc/config.yml`; an optional
//! `.appdesc/config.local.yml` is layered on top of it. Neither file is
//! required.

use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::AppdescConfig;
use crate::error::{AppdescError, Result};

/// Paths to configuration files in merge order.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .appdesc/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .appdesc/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        let existing = |name: &str| {
            let path = project_root.join(".appdesc").join(name);
            path.exists().then_some(path)
        };

        Self {
            project: existing("config.yml"),
            project_local: existing("config.local.yml"),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }
}

/// Find the project root by walking up from `start`.
///
/// Looks for a `.appdesc` directory first and falls back to `.git`.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(".appdesc").is_dir() || current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a config file as a raw YAML value.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_value(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AppdescError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            AppdescError::Io(e)
        }
    })?;

    // An empty file is an empty config.
    if content.trim().is_empty() {
        return Ok(Value::Mapping(Default::default()));
    }

    serde_yaml::from_str(&content).map_err(|e| AppdescError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Layer `overlay` on top of `base`.
///
/// Mappings merge key by key; anything else in the overlay replaces the base.
fn overlay(base: Value, overlay_value: Value) -> Value {
    match (base, overlay_value) {
        (Value::Mapping(mut base_map), Value::Mapping(top)) => {
            for (key, value) in top {
                let merged = match base_map.remove(&key) {
                    Some(existing) => overlay(existing, value),
                    None => value,
                };
                base_map.insert(key, merged);
            }
            Value::Mapping(base_map)
        }
        (_, top) => top,
    }
}

/// Load the effective configuration for a project.
///
/// Returns the default configuration when no config file exists.
pub fn load_config(project_root: &Path) -> Result<AppdescConfig> {
    let paths = ConfigPaths::discover(project_root);
    let mut merged = Value::Mapping(Default::default());
    let mut last_path = PathBuf::from(".appdesc/config.yml");

    for path in paths.all_existing() {
        tracing::debug!("Loading config from {}", path.display());
        merged = overlay(merged, load_config_value(path)?);
        last_path = path.clone();
    }

    serde_yaml::from_value(merged).map_err(|e| AppdescError::ConfigParseError {
        path: last_path,
        message: e.to_string(),
    })
}
