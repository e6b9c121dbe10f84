//! Interface provision and requirement resolution.
//!
//! # Architecture
//!
//! - [`registry`] - Snapshot of loaded applications keyed by id
//! - [`provided`] - Transitive provision over the dependency graph
//! - [`gaps`] - Classification of module requirements against provisions
//!
//! # Example
//!
//! ```
//! use appdesc::descriptor::{ApplicationDescriptor, InterfaceRef, ModuleDescriptor};
//! use appdesc::resolver::{report_gaps, resolve_provided_interfaces, ApplicationRegistry};
//!
//! let base = ApplicationDescriptor::new("base-1.0.0").with_modules(vec![
//!     ModuleDescriptor::new("mod-users-16.1.0")
//!         .with_provides(vec![InterfaceRef::new("users", "16.1")]),
//! ]);
//! let app = ApplicationDescriptor::new("app-1.0.0")
//!     .with_dependencies(&["base-1.0.0"])
//!     .with_modules(vec![ModuleDescriptor::new("mod-orders-1.0.0")
//!         .with_requires(vec![InterfaceRef::new("users", "16.0")])]);
//!
//! let registry: ApplicationRegistry = vec![base].into_iter().collect();
//! let provided = resolve_provided_interfaces(&app, &registry).unwrap();
//! assert!(report_gaps(&app, &provided).is_satisfied());
//! ```

pub mod gaps;
pub mod provided;
pub mod registry;

pub use gaps::{classify, report_gaps, GapReport, InterfaceStatus, ModuleGaps};
pub use provided::{
    resolve_provided_interfaces, CircularDependencyError, ProvidedInterface, ProvidedInterfaceSet,
};
pub use registry::ApplicationRegistry;
