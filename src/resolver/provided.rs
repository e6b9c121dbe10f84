//! Transitive interface provision.
//!
//! Walks an application's dependency graph depth-first with an explicit
//! stack. Applications on the current branch are tracked in `path`; meeting
//! one of them again is a cycle and aborts the walk with
//! [`CircularDependencyError`]. Applications whose dependencies were fully
//! walked are not walked again.

use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

use crate::descriptor::ApplicationDescriptor;

use super::ApplicationRegistry;

/// Dependency cycle between applications.
///
/// `path` starts and ends with the application that was re-entered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Circular dependency detected: {}", .path.join(" -> "))]
pub struct CircularDependencyError {
    pub path: Vec<String>,
}

/// One provided `(id, version)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProvidedInterface {
    pub id: String,
    pub version: String,
}

/// Provided interfaces in discovery order, unique by `(id, version)`.
///
/// The same id may appear with several versions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvidedInterfaceSet {
    entries: Vec<ProvidedInterface>,
    seen: HashSet<ProvidedInterface>,
}

impl ProvidedInterfaceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. Returns `false` if the pair was already present.
    pub fn insert(&mut self, id: &str, version: &str) -> bool {
        let entry = ProvidedInterface {
            id: id.to_string(),
            version: version.to_string(),
        };
        if !self.seen.insert(entry.clone()) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn contains(&self, id: &str, version: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.id == id && e.version == version)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProvidedInterface> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[ProvidedInterface] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ProvidedInterfaceSet {
    type Item = &'a ProvidedInterface;
    type IntoIter = std::slice::Iter<'a, ProvidedInterface>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for ProvidedInterfaceSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

/// Add the non-system interfaces provided by an application's own backend modules.
fn collect_own(app: &ApplicationDescriptor, provided: &mut ProvidedInterfaceSet) {
    for iface in app
        .module_descriptors
        .iter()
        .flat_map(|m| m.provides.iter())
        .filter(|iface| !iface.is_system())
    {
        provided.insert(&iface.id, &iface.version);
    }
}

/// Collect every interface provided along an application's dependency chain.
///
/// Dependencies missing from the registry are skipped.
///
/// # Errors
///
/// Returns [`CircularDependencyError`] if the chain loops back to an
/// application that is still being expanded.
pub fn resolve_provided_interfaces(
    app: &ApplicationDescriptor,
    registry: &ApplicationRegistry,
) -> Result<ProvidedInterfaceSet, CircularDependencyError> {
    let mut provided = ProvidedInterfaceSet::new();
    let mut path: Vec<&str> = vec![app.id.as_str()];
    let mut on_path: HashSet<&str> = HashSet::from([app.id.as_str()]);
    let mut finished: HashSet<&str> = HashSet::new();

    collect_own(app, &mut provided);

    // (application, index of the next dependency to visit)
    let mut stack: Vec<(&ApplicationDescriptor, usize)> = vec![(app, 0)];

    while let Some(frame) = stack.last_mut() {
        let (current, next) = *frame;
        frame.1 += 1;

        let Some(dependency) = current.dependencies.get(next) else {
            stack.pop();
            if let Some(done) = path.pop() {
                on_path.remove(done);
                finished.insert(done);
            }
            continue;
        };

        let Some(target) = registry.get(&dependency.id) else {
            tracing::debug!(
                "Skipping unknown dependency {} of {}",
                dependency.id,
                current.id
            );
            continue;
        };

        if on_path.contains(target.id.as_str()) {
            let start = path
                .iter()
                .position(|id| *id == target.id)
                .unwrap_or_default();
            let mut cycle: Vec<String> = path[start..].iter().map(|id| id.to_string()).collect();
            cycle.push(target.id.clone());
            return Err(CircularDependencyError { path: cycle });
        }

        if finished.contains(target.id.as_str()) {
            continue;
        }

        tracing::debug!("Expanding dependency {} of {}", target.id, current.id);
        path.push(&target.id);
        on_path.insert(&target.id);
        collect_own(target, &mut provided);
        stack.push((target, 0));
    }

    Ok(provided)
}
