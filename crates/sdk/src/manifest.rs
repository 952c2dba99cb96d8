//! JSON manifest loading for the configuration phase.
//!
//! Each component is authored as one JSON manifest. The manifest
//! directory is read in file-name order so registration order is
//! deterministic across runs.

use crate::component::Component;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for manifest loading.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("component manifest directory not found: {0}")]
    DirNotFound(PathBuf),

    #[error("failed to read manifest {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a single component manifest.
pub fn load_file(path: &Path) -> Result<Component, ManifestError> {
    let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every `*.json` manifest in `dir`, sorted by file name.
pub fn load_dir(dir: &Path) -> Result<Vec<Component>, ManifestError> {
    if !dir.is_dir() {
        return Err(ManifestError::DirNotFound(dir.to_path_buf()));
    }

    let entries = std::fs::read_dir(dir).map_err(|source| ManifestError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let mut components = Vec::with_capacity(paths.len());
    for path in paths {
        components.push(load_file(&path)?);
    }
    Ok(components)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_manifest(dir: &Path, file: &str, kind: &str, name: &str, id: &str) {
        let json = format!(
            r#"{{
                "kind": "{kind}",
                "name": "{name}",
                "id": "{id}",
                "documentation_files": [],
                "license_files": [],
                "third_party_license_files": [],
                "truffle_jars": ["{id}_DIST"]
            }}"#
        );
        std::fs::write(dir.join(file), json).unwrap();
    }

    #[test]
    fn loads_in_file_name_order() {
        let dir = tempfile::tempdir().unwrap();
        write_manifest(dir.path(), "ruby.json", "language", "Ruby", "ruby");
        write_manifest(dir.path(), "inspector.json", "tool", "Chrome Inspector", "inspector");

        let components = load_dir(dir.path()).unwrap();
        let ids: Vec<_> = components.iter().map(Component::id).collect();
        assert_eq!(ids, vec!["inspector", "ruby"]);
    }

    #[test]
    fn ignores_non_json_files() {
        let dir = tempfile::tempdir().unwrap();
        write_manifest(dir.path(), "ruby.json", "language", "Ruby", "ruby");
        std::fs::write(dir.path().join("README.md"), "not a manifest").unwrap();

        let components = load_dir(dir.path()).unwrap();
        assert_eq!(components.len(), 1);
    }

    #[test]
    fn missing_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dir(&dir.path().join("components")).unwrap_err();
        assert!(matches!(err, ManifestError::DirNotFound(_)));
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.json"), "{ not json").unwrap();

        let err = load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
    }
}
