//! Artifact identifiers of the form `name-version`.
//!
//! The version starts at the first hyphen that is immediately followed by
//! an ASCII digit. Hyphens followed by anything else belong to the name,
//! so `my-module-beta` has no version and `mod-ui-10.2.0` is `mod-ui` at
//! `10.2.0`.

use serde::{Deserialize, Serialize};

/// A decoded artifact identifier.
///
/// Also serves as the compact `{id, name, version}` module reference stored
/// in an application's `modules` and `uiModules` lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactId {
    /// The full identifier.
    #[serde(default)]
    pub id: String,
    /// Everything before the version separator.
    #[serde(default)]
    pub name: String,
    /// Everything after the version separator.
    #[serde(default)]
    pub version: Option<String>,
}

impl ArtifactId {
    /// Build an identifier from its parts.
    pub fn encode(name: &str, version: &str) -> Self {
        Self {
            id: format!("{}-{}", name, version),
            name: name.to_string(),
            version: Some(version.to_string()),
        }
    }
}

/// Split an identifier into name and version.
pub fn decode_artifact_id(id: &str) -> ArtifactId {
    let bytes = id.as_bytes();
    let split = bytes
        .windows(2)
        .position(|pair| pair[0] == b'-' && pair[1].is_ascii_digit());

    match split {
        Some(idx) => ArtifactId {
            id: id.to_string(),
            name: id[..idx].to_string(),
            version: Some(id[idx + 1..].to_string()),
        },
        None => ArtifactId {
            id: id.to_string(),
            name: id.to_string(),
            version: None,
        },
    }
}
