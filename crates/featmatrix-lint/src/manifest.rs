//! Dependency names from a `package.json` manifest.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{LintConfigError, Result};

#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    dependencies: Map<String, Value>,
}

/// Returns the names under a manifest's `dependencies`, in file order.
///
/// `devDependencies` and the other dependency sections are not read.
pub fn parse_manifest_dependencies(text: &str) -> serde_json::Result<Vec<String>> {
    let manifest: Manifest = serde_json::from_str(text)?;
    Ok(manifest.dependencies.into_iter().map(|(name, _)| name).collect())
}

/// Reads a manifest from disk and returns its dependency names.
pub fn read_manifest_dependencies(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LintConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let names = parse_manifest_dependencies(&text).map_err(|source| LintConfigError::Manifest {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), dependencies = names.len(), "read manifest");
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_file_order() {
        let names = parse_manifest_dependencies(
            r#"{"dependencies": {"remark-lint-z": "1", "remark-cli": "1", "remark-lint-a": "1"}}"#,
        )
        .unwrap();
        assert_eq!(names, vec!["remark-lint-z", "remark-cli", "remark-lint-a"]);
    }

    #[test]
    fn test_ignores_dev_dependencies() {
        let names = parse_manifest_dependencies(
            r#"{"dependencies": {"a": "1"}, "devDependencies": {"remark-lint-x": "1"}}"#,
        )
        .unwrap();
        assert_eq!(names, vec!["a"]);
    }

    #[test]
    fn test_dev_dependencies_only() {
        let names = parse_manifest_dependencies(
            r#"{"devDependencies": {"remark-lint-x": "1"}}"#,
        )
        .unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_missing_sections() {
        assert!(parse_manifest_dependencies(r#"{"name": "docs"}"#)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_rejects_non_object_section() {
        assert!(parse_manifest_dependencies(r#"{"dependencies": ["a"]}"#).is_err());
    }

    #[test]
    fn test_read_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_manifest_dependencies(dir.path().join("package.json")).unwrap_err();
        assert!(matches!(err, LintConfigError::Read { .. }));
    }

    #[test]
    fn test_read_invalid_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, "{").unwrap();
        let err = read_manifest_dependencies(&path).unwrap_err();
        assert!(matches!(err, LintConfigError::Manifest { .. }));
        assert!(err.to_string().contains("package.json"));
    }
}
