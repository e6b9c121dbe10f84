//! Integration tests for the public resolution API.

use appdesc::descriptor::{ApplicationDescriptor, InterfaceRef, ModuleDescriptor};
use appdesc::resolver::ApplicationRegistry;
use appdesc::workspace::Workspace;
use appdesc::{
    decode_artifact_id, dedupe_by, is_compatible, report_gaps, resolve_provided_interfaces,
};
use tempfile::TempDir;

fn module(id: &str, provides: &[(&str, &str)]) -> ModuleDescriptor {
    ModuleDescriptor::new(id).with_provides(
        provides
            .iter()
            .map(|(id, version)| InterfaceRef::new(*id, *version))
            .collect(),
    )
}

#[test]
fn layered_applications_resolve_through_workspace() {
    let temp = TempDir::new().unwrap();
    let mut workspace = Workspace::new();
    workspace.add_applications(vec![
        ApplicationDescriptor::new("platform-1.0.0")
            .with_modules(vec![module("mod-users-19.0.0", &[("users", "16.1")])]),
        ApplicationDescriptor::new("acq-1.0.0")
            .with_dependencies(&["platform-1.0.0"])
            .with_modules(vec![module("mod-orders-12.0.0", &[("orders", "13.0")])]),
        ApplicationDescriptor::new("erm-1.0.0")
            .with_dependencies(&["platform-1.0.0", "acq-1.0.0"])
            .with_modules(vec![ModuleDescriptor::new("mod-agreements-7.0.0")
                .with_requires(vec![
                    InterfaceRef::new("users", "16.0"),
                    InterfaceRef::new("orders", "12.0 13.0"),
                ])]),
    ]);
    workspace.save(temp.path()).unwrap();

    let workspace = Workspace::load(temp.path()).unwrap();
    let app = workspace.application("erm-1.0.0").unwrap();
    let provided = resolve_provided_interfaces(app, &workspace.registry()).unwrap();

    // platform is reached twice (directly and through acq) but contributes once
    assert_eq!(provided.len(), 2);
    assert!(provided.contains("users", "16.1"));
    assert!(provided.contains("orders", "13.0"));

    let report = report_gaps(app, &provided);
    assert!(report.is_satisfied());
    assert_eq!(report.required_count(), 2);
}

#[test]
fn cycle_through_registry_reports_path() {
    let registry: ApplicationRegistry = vec![
        ApplicationDescriptor::new("b").with_dependencies(&["c"]),
        ApplicationDescriptor::new("c").with_dependencies(&["b"]),
    ]
    .into_iter()
    .collect();
    let root = ApplicationDescriptor::new("a").with_dependencies(&["b"]);

    let err = resolve_provided_interfaces(&root, &registry).unwrap_err();

    assert_eq!(err.path, vec!["b", "c", "b"]);
    assert_eq!(err.to_string(), "Circular dependency detected: b -> c -> b");
}

#[test]
fn compatibility_examples() {
    assert!(is_compatible("users", "16.1", "users", "15.0 16.0"));
    assert!(is_compatible("users", "16.1.3", "users", "16.1.2"));
    assert!(!is_compatible("users", "16.1.1", "users", "16.1.2"));
    assert!(!is_compatible("users", "16.1", "Users", "16.1"));
    assert!(!is_compatible("users", "abc", "users", "16.1"));
    assert!(!is_compatible("users", "16.1", "users", ""));
}

#[test]
fn artifact_ids_and_dedupe() {
    let decoded = decode_artifact_id("folio_inventory-12.0.0");
    assert_eq!(decoded.name, "folio_inventory");
    assert_eq!(decoded.version.as_deref(), Some("12.0.0"));

    let unique = dedupe_by(vec!["a-1", "b-1", "a-1"], |s| s.to_string());
    assert_eq!(unique, vec!["a-1", "b-1"]);
}
