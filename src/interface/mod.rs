//! Interface versions and compatibility.
//!
//! - [`version`] - Version tuples and whitespace-separated alternative sets
//! - [`compat`] - Provided-vs-required compatibility matching

pub mod compat;
pub mod version;

pub use compat::{compare, is_compatible, Compatibility};
pub use version::{
    parse_provided_version, parse_version_alternatives, parse_version_token, Version,
    VersionAlternatives,
};
