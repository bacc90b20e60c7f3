//! Package directories from the project descriptor (`sfdx-project.json`).
//!
//! The declared order matters: source roots are tried first-match-wins when
//! classifying a path, so duplicates are dropped but order is kept.

use std::path::Path;

use serde::Deserialize;

use crate::error::ProjectError;

/// Conventional descriptor file name at the repository root.
pub const PROJECT_FILE: &str = "sfdx-project.json";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectDescriptor {
    #[serde(default)]
    package_directories: Option<Vec<PackageDirectoryEntry>>,
}

#[derive(Debug, Deserialize)]
struct PackageDirectoryEntry {
    #[serde(default)]
    path: Option<String>,
}

/// Parse a descriptor document and return its package directory paths.
pub fn package_directories_from_str(
    contents: &str,
    origin: &Path,
) -> Result<Vec<String>, ProjectError> {
    let descriptor: ProjectDescriptor =
        serde_json::from_str(contents).map_err(|e| ProjectError::Parse {
            path: origin.to_path_buf(),
            source: e,
        })?;

    let entries = match descriptor.package_directories {
        Some(entries) if !entries.is_empty() => entries,
        _ => {
            return Err(ProjectError::MissingPackageDirectories {
                path: origin.to_path_buf(),
            })
        }
    };

    let mut roots: Vec<String> = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let Some(path) = entry.path else {
            return Err(ProjectError::MissingPath {
                path: origin.to_path_buf(),
                index,
            });
        };
        if !roots.contains(&path) {
            roots.push(path);
        }
    }
    Ok(roots)
}

/// Load package directory paths from the descriptor at `path`.
pub fn load_package_directories(path: &Path) -> Result<Vec<String>, ProjectError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ProjectError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    package_directories_from_str(&contents, path)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn parse(json: &str) -> Result<Vec<String>, ProjectError> {
        package_directories_from_str(json, Path::new(PROJECT_FILE))
    }

    #[test]
    fn roots_keep_declaration_order_and_drop_duplicates() {
        let roots = parse(
            r#"{"packageDirectories": [
                {"path": "force-app", "default": true},
                {"path": "unpackaged"},
                {"path": "force-app"}
            ], "sourceApiVersion": "60.0"}"#,
        )
        .expect("parse");
        assert_eq!(roots, vec!["force-app".to_string(), "unpackaged".to_string()]);
    }

    #[rstest]
    #[case(r#"{"sourceApiVersion": "60.0"}"#)]
    #[case(r#"{"packageDirectories": []}"#)]
    fn missing_or_empty_package_directories_is_fatal(#[case] json: &str) {
        let err = parse(json).unwrap_err();
        assert!(matches!(err, ProjectError::MissingPackageDirectories { .. }));
    }

    #[test]
    fn entry_without_path_is_fatal() {
        let err = parse(r#"{"packageDirectories": [{"path": "a"}, {"default": true}]}"#).unwrap_err();
        assert!(matches!(err, ProjectError::MissingPath { index: 1, .. }));
    }

    #[test]
    fn unreadable_descriptor_is_io_error() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let err = load_package_directories(&dir.path().join(PROJECT_FILE)).unwrap_err();
        assert!(matches!(err, ProjectError::Io { .. }));
    }
}
