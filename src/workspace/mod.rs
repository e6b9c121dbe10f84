//! Workspace persistence.
//!
//! A workspace is the set of descriptors loaded for a project: applications,
//! backend module descriptors and UI module descriptors.

pub mod store;

pub use store::Workspace;
