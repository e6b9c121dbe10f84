//! Descriptor file import.
//!
//! Each file holds exactly one descriptor as a JSON object with at least
//! an `id` property. Within one batch a repeated id is reported as a
//! warning and the later copy is dropped.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppdescError, Result};

use super::Descriptor;

/// Properties every imported document must carry.
const REQUIRED_PROPERTIES: &[&str] = &["id"];

/// Descriptors accepted from one import, plus anything worth telling the user.
#[derive(Debug)]
pub struct ImportBatch<T> {
    pub descriptors: Vec<T>,
    pub warnings: Vec<String>,
}

impl<T> Default for ImportBatch<T> {
    fn default() -> Self {
        Self {
            descriptors: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

/// Parse and validate a single descriptor document.
///
/// # Errors
///
/// Returns `DescriptorParseError` if the content is not JSON and
/// `InvalidDescriptor` if it is not an object with the required properties.
pub fn parse_descriptor_document<T: DeserializeOwned>(content: &str, source: &Path) -> Result<T> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| AppdescError::DescriptorParseError {
            path: source.to_path_buf(),
            message: e.to_string(),
        })?;

    let Some(object) = value.as_object() else {
        return Err(AppdescError::InvalidDescriptor {
            message: format!(
                "{}: expected a single descriptor object",
                source.display()
            ),
        });
    };

    let missing: Vec<&str> = REQUIRED_PROPERTIES
        .iter()
        .copied()
        .filter(|property| !object.contains_key(*property))
        .collect();
    if !missing.is_empty() {
        return Err(AppdescError::InvalidDescriptor {
            message: format!(
                "{}: JSON must contain following properties: {}",
                source.display(),
                missing.join(", ")
            ),
        });
    }

    serde_json::from_value(value).map_err(|e| AppdescError::DescriptorParseError {
        path: source.to_path_buf(),
        message: e.to_string(),
    })
}

/// Read descriptor files in order.
pub fn import_files<T>(paths: &[PathBuf]) -> Result<ImportBatch<T>>
where
    T: Descriptor + DeserializeOwned,
{
    let mut batch = ImportBatch::default();
    let mut seen = HashSet::new();

    for path in paths {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppdescError::InvalidDescriptor {
                    message: format!("{}: file not found", path.display()),
                }
            } else {
                AppdescError::Io(e)
            }
        })?;

        let descriptor: T = parse_descriptor_document(&content, path)?;
        if !seen.insert(descriptor.id().to_string()) {
            tracing::debug!("Skipping duplicate descriptor {}", descriptor.id());
            batch.warnings.push(format!(
                "Descriptor '{}' is already loaded",
                descriptor.id()
            ));
            continue;
        }
        batch.descriptors.push(descriptor);
    }

    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{ApplicationDescriptor, ModuleDescriptor};
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn parses_module_document() {
        let desc: ModuleDescriptor = parse_descriptor_document(
            r#"{"id": "mod-a-1.0.0", "provides": [{"id": "a", "version": "1.0"}]}"#,
            Path::new("mod-a.json"),
        )
        .unwrap();
        assert_eq!(desc.id, "mod-a-1.0.0");
        assert_eq!(desc.provides.len(), 1);
    }

    #[test]
    fn rejects_arrays() {
        let result: Result<ModuleDescriptor> =
            parse_descriptor_document(r#"[{"id": "x"}]"#, Path::new("list.json"));
        assert!(matches!(
            result,
            Err(AppdescError::InvalidDescriptor { .. })
        ));
    }

    #[test]
    fn rejects_documents_without_id() {
        let result: Result<ModuleDescriptor> =
            parse_descriptor_document(r#"{"name": "x"}"#, Path::new("x.json"));
        match result {
            Err(AppdescError::InvalidDescriptor { message }) => {
                assert!(message.contains("id"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn reports_malformed_json() {
        let result: Result<ModuleDescriptor> =
            parse_descriptor_document("{not json", Path::new("bad.json"));
        assert!(matches!(
            result,
            Err(AppdescError::DescriptorParseError { .. })
        ));
    }

    #[test]
    fn import_warns_about_duplicates_in_batch() {
        let temp = TempDir::new().unwrap();
        let first = write(&temp, "a.json", r#"{"id": "mod-a-1.0.0", "name": "first"}"#);
        let second = write(&temp, "b.json", r#"{"id": "mod-b-1.0.0"}"#);
        let again = write(&temp, "a2.json", r#"{"id": "mod-a-1.0.0", "name": "second"}"#);

        let batch: ImportBatch<ModuleDescriptor> =
            import_files(&[first, second, again]).unwrap();

        assert_eq!(batch.descriptors.len(), 2);
        assert_eq!(batch.descriptors[0].name.as_deref(), Some("first"));
        assert_eq!(batch.warnings.len(), 1);
        assert!(batch.warnings[0].contains("mod-a-1.0.0"));
    }

    #[test]
    fn import_applications() {
        let temp = TempDir::new().unwrap();
        let path = write(
            &temp,
            "app.json",
            r#"{"id": "app-1.0.0", "name": "app", "version": "1.0.0"}"#,
        );
        let batch: ImportBatch<ApplicationDescriptor> = import_files(&[path]).unwrap();
        assert_eq!(batch.descriptors[0].name, "app");
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result: Result<ImportBatch<ModuleDescriptor>> =
            import_files(&[temp.path().join("nope.json")]);
        assert!(result.is_err());
    }
}
