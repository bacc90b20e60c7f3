//! Metadata type catalog: the directory-name → descriptor lookup table.
//!
//! # Source format
//!
//! A JSON array of records (the metadata registry export), one per type:
//!
//! ```text
//! [
//!   { "directoryName": "classes", "xmlName": "ApexClass", "suffix": "cls" },
//!   { "directoryName": "objects", "xmlName": "CustomObject",
//!     "childXmlNames": ["CustomField", "ListView"] },
//!   { "directoryName": "reports", "xmlName": "Report", "inFolder": true }
//! ]
//! ```
//!
//! Files ending in `.yaml` / `.yml` are read as YAML with the same shape.
//! Keys are matched exactly; the catalog never case-folds directory names.

use std::collections::HashMap;
use std::path::Path;

use crate::error::CatalogError;
use crate::types::MetadataTypeDescriptor;

/// Read-only lookup table keyed by directory name.
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    by_directory: HashMap<String, MetadataTypeDescriptor>,
}

impl TypeCatalog {
    /// Build a catalog from descriptors. A later duplicate `directory_name`
    /// replaces an earlier one.
    pub fn from_descriptors<I>(descriptors: I) -> Self
    where
        I: IntoIterator<Item = MetadataTypeDescriptor>,
    {
        let by_directory = descriptors
            .into_iter()
            .map(|d| (d.directory_name.clone(), d))
            .collect();
        Self { by_directory }
    }

    /// Parse a JSON catalog document. `origin` is used only for error context.
    pub fn from_json_str(contents: &str, origin: &Path) -> Result<Self, CatalogError> {
        let records: Vec<MetadataTypeDescriptor> =
            serde_json::from_str(contents).map_err(|e| CatalogError::Json {
                path: origin.to_path_buf(),
                source: e,
            })?;
        Ok(Self::from_descriptors(records))
    }

    /// Parse a YAML catalog document. `origin` is used only for error context.
    pub fn from_yaml_str(contents: &str, origin: &Path) -> Result<Self, CatalogError> {
        let records: Vec<MetadataTypeDescriptor> =
            serde_yaml::from_str(contents).map_err(|e| CatalogError::Yaml {
                path: origin.to_path_buf(),
                source: e,
            })?;
        Ok(Self::from_descriptors(records))
    }

    /// Load the catalog at `path`, choosing the parser by file extension.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_str(&contents, path),
            _ => Self::from_json_str(&contents, path),
        }
    }

    /// Exact-match lookup by directory name.
    pub fn get(&self, directory_name: &str) -> Option<&MetadataTypeDescriptor> {
        self.by_directory.get(directory_name)
    }

    pub fn contains(&self, directory_name: &str) -> bool {
        self.by_directory.contains_key(directory_name)
    }

    pub fn len(&self) -> usize {
        self.by_directory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_directory.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::types::TypeName;

    const SAMPLE: &str = r#"[
        {"directoryName": "classes", "xmlName": "ApexClass", "suffix": "cls"},
        {"directoryName": "objects", "xmlName": "CustomObject", "childXmlNames": ["CustomField"]},
        {"directoryName": "fields", "xmlName": "CustomField"},
        {"directoryName": "reports", "xmlName": "Report", "inFolder": true, "useFoldername": false}
    ]"#;

    #[test]
    fn json_catalog_is_keyed_by_directory_name() {
        let catalog = TypeCatalog::from_json_str(SAMPLE, Path::new("metadata.json")).expect("parse");
        assert_eq!(catalog.len(), 4);
        let objects = catalog.get("objects").expect("objects");
        assert_eq!(objects.xml_name, TypeName::from("CustomObject"));
        assert_eq!(objects.child_xml_names.as_deref(), Some(&["CustomField".to_string()][..]));
        assert!(catalog.get("reports").expect("reports").in_folder);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let catalog = TypeCatalog::from_json_str(SAMPLE, Path::new("metadata.json")).expect("parse");
        assert!(catalog.contains("classes"));
        assert!(!catalog.contains("Classes"));
    }

    #[test]
    fn later_duplicate_replaces_earlier() {
        let catalog = TypeCatalog::from_descriptors([
            MetadataTypeDescriptor::new("classes", "Old"),
            MetadataTypeDescriptor::new("classes", "ApexClass"),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("classes").expect("classes").xml_name.as_str(), "ApexClass");
    }

    #[test]
    fn load_reads_yaml_by_extension() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("metadata.yaml");
        fs::write(
            &path,
            "- directoryName: reports\n  xmlName: Report\n  inFolder: true\n  useFoldername: true\n",
        )
        .expect("write");
        let catalog = TypeCatalog::load(&path).expect("load");
        let reports = catalog.get("reports").expect("reports");
        assert!(reports.in_folder);
        assert!(reports.use_foldername);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = TempDir::new().expect("tempdir");
        let err = TypeCatalog::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn malformed_json_reports_path() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("metadata.json");
        fs::write(&path, "{not json").expect("write");
        let err = TypeCatalog::load(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Json { .. }));
        assert!(err.to_string().contains("metadata.json"));
    }
}
