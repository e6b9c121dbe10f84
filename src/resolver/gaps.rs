//! Requirement gap reporting.
//!
//! Classifies each interface a module requires (or optionally consumes) as
//! satisfied when at least one provided interface is compatible with it.

use serde::Serialize;

use crate::descriptor::{dedupe_by, ApplicationDescriptor, DescriptorKind, InterfaceRef};
use crate::interface::is_compatible;

use super::ProvidedInterfaceSet;

/// Satisfaction of one interface requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceStatus {
    pub id: String,
    pub version: String,
    pub satisfied: bool,
}

impl InterfaceStatus {
    /// Display label: `id-version`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.id, self.version)
    }
}

/// Requirement status for one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleGaps {
    pub module_id: String,
    pub kind: DescriptorKind,
    pub required: Vec<InterfaceStatus>,
    pub optional: Vec<InterfaceStatus>,
}

impl ModuleGaps {
    pub fn unsatisfied_required(&self) -> impl Iterator<Item = &InterfaceStatus> {
        self.required.iter().filter(|s| !s.satisfied)
    }

    pub fn unsatisfied_optional(&self) -> impl Iterator<Item = &InterfaceStatus> {
        self.optional.iter().filter(|s| !s.satisfied)
    }
}

/// Requirement status for every module of an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GapReport {
    pub application_id: String,
    pub modules: Vec<ModuleGaps>,
}

impl GapReport {
    /// True when every required interface is satisfied.
    pub fn is_satisfied(&self) -> bool {
        self.unsatisfied_required_count() == 0
    }

    pub fn required_count(&self) -> usize {
        self.modules.iter().map(|m| m.required.len()).sum()
    }

    pub fn optional_count(&self) -> usize {
        self.modules.iter().map(|m| m.optional.len()).sum()
    }

    pub fn unsatisfied_required_count(&self) -> usize {
        self.modules
            .iter()
            .map(|m| m.unsatisfied_required().count())
            .sum()
    }

    pub fn unsatisfied_optional_count(&self) -> usize {
        self.modules
            .iter()
            .map(|m| m.unsatisfied_optional().count())
            .sum()
    }
}

/// Classify interface requirements against the provided set.
///
/// Requirements are deduplicated by `(id, version)` first; output order
/// follows the surviving requirements.
pub fn classify(requirements: &[InterfaceRef], provided: &ProvidedInterfaceSet) -> Vec<InterfaceStatus> {
    dedupe_by(requirements.iter(), |&r| (r.id.as_str(), r.version.as_str()))
        .into_iter()
        .map(|required| InterfaceStatus {
            id: required.id.clone(),
            version: required.version.clone(),
            satisfied: provided
                .iter()
                .any(|p| is_compatible(&p.id, &p.version, &required.id, &required.version)),
        })
        .collect()
}

/// Build the gap report for an application's backend and UI modules.
///
/// Modules without any required or optional interface are left out.
pub fn report_gaps(app: &ApplicationDescriptor, provided: &ProvidedInterfaceSet) -> GapReport {
    let backend = app
        .module_descriptors
        .iter()
        .map(|m| (m, DescriptorKind::Module));
    let ui = app
        .ui_module_descriptors
        .iter()
        .map(|m| (m, DescriptorKind::UiModule));

    let modules = backend
        .chain(ui)
        .map(|(module, kind)| ModuleGaps {
            module_id: module.id.clone(),
            kind,
            required: classify(&module.requires, provided),
            optional: classify(&module.optional, provided),
        })
        .filter(|gaps| !gaps.required.is_empty() || !gaps.optional.is_empty())
        .collect();

    GapReport {
        application_id: app.id.clone(),
        modules,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ModuleDescriptor;

    fn provided(pairs: &[(&str, &str)]) -> ProvidedInterfaceSet {
        let mut set = ProvidedInterfaceSet::new();
        for (id, version) in pairs {
            set.insert(id, version);
        }
        set
    }

    #[test]
    fn classifies_each_requirement() {
        let set = provided(&[("users", "16.1"), ("login", "7.3")]);
        let requires = vec![
            InterfaceRef::new("users", "16.0"),
            InterfaceRef::new("login", "8.0"),
            InterfaceRef::new("perms", "5.0"),
        ];

        let statuses = classify(&requires, &set);

        let satisfied: Vec<bool> = statuses.iter().map(|s| s.satisfied).collect();
        assert_eq!(satisfied, vec![true, false, false]);
    }

    #[test]
    fn dedupes_by_id_and_version_not_label() {
        let requires = vec![
            InterfaceRef::new("a-1", "2.0"),
            InterfaceRef::new("a", "1-2.0"),
            InterfaceRef::new("a-1", "2.0"),
        ];

        let statuses = classify(&requires, &ProvidedInterfaceSet::new());

        let ids: Vec<&str> = statuses.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a-1", "a"]);
    }

    #[test]
    fn any_compatible_candidate_satisfies() {
        let set = provided(&[("users", "15.0"), ("users", "16.2")]);
        let statuses = classify(&[InterfaceRef::new("users", "16.1")], &set);
        assert!(statuses[0].satisfied);
    }

    #[test]
    fn deduplicates_requirements_by_label() {
        let set = provided(&[]);
        let requires = vec![
            InterfaceRef::new("users", "16.0"),
            InterfaceRef::new("perms", "5.0"),
            InterfaceRef::new("users", "16.0"),
            InterfaceRef::new("users", "15.0 16.0"),
        ];

        let labels: Vec<String> = classify(&requires, &set).iter().map(|s| s.label()).collect();

        assert_eq!(labels, vec!["users-16.0", "perms-5.0", "users-15.0 16.0"]);
    }

    #[test]
    fn report_covers_backend_then_ui_modules() {
        let app = ApplicationDescriptor::new("app-1.0.0")
            .with_modules(vec![
                ModuleDescriptor::new("mod-a-1.0.0")
                    .with_requires(vec![InterfaceRef::new("users", "16.0")]),
                ModuleDescriptor::new("mod-quiet-1.0.0"),
            ])
            .with_ui_modules(vec![ModuleDescriptor::new("folio_a-2.0.0")
                .with_requires(vec![InterfaceRef::new("orders", "1.0")])
                .with_optional(vec![InterfaceRef::new("notes", "2.0")])]);
        let set = provided(&[("users", "16.4")]);

        let report = report_gaps(&app, &set);

        let ids: Vec<&str> = report.modules.iter().map(|m| m.module_id.as_str()).collect();
        assert_eq!(ids, vec!["mod-a-1.0.0", "folio_a-2.0.0"]);
        assert_eq!(report.modules[1].kind, DescriptorKind::UiModule);
        assert_eq!(report.required_count(), 2);
        assert_eq!(report.unsatisfied_required_count(), 1);
        assert_eq!(report.unsatisfied_optional_count(), 1);
        assert!(!report.is_satisfied());
    }

    #[test]
    fn optional_gaps_do_not_fail_report() {
        let app = ApplicationDescriptor::new("app").with_modules(vec![ModuleDescriptor::new(
            "mod-a-1.0.0",
        )
        .with_optional(vec![InterfaceRef::new("notes", "2.0")])]);

        let report = report_gaps(&app, &provided(&[]));

        assert!(report.is_satisfied());
        assert_eq!(report.optional_count(), 1);
    }
}
