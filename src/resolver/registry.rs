//! Application lookup by id.

use std::collections::HashMap;

use crate::descriptor::ApplicationDescriptor;

/// A snapshot of loaded applications keyed by id.
///
/// The registry owns its descriptors, so later changes to the source they
/// were copied from never affect a resolution that is already running.
#[derive(Debug, Clone, Default)]
pub struct ApplicationRegistry {
    applications: HashMap<String, ApplicationDescriptor>,
}

impl ApplicationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an application unless one with the same id is already present.
    ///
    /// Returns `false` when the application was ignored.
    pub fn insert(&mut self, application: ApplicationDescriptor) -> bool {
        if self.applications.contains_key(&application.id) {
            return false;
        }
        self.applications
            .insert(application.id.clone(), application);
        true
    }

    pub fn get(&self, id: &str) -> Option<&ApplicationDescriptor> {
        self.applications.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.applications.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.applications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }
}

impl FromIterator<ApplicationDescriptor> for ApplicationRegistry {
    fn from_iter<I: IntoIterator<Item = ApplicationDescriptor>>(iter: I) -> Self {
        let mut registry = Self::new();
        for application in iter {
            registry.insert(application);
        }
        registry
    }
}
