//! Domain types for metadata classification.
//!
//! Paths reported by the diff are repo-relative and `/`-separated; they are
//! carried as `PathBuf` and decomposed with `std::path` helpers.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A manifest type label (`xmlName`), e.g. `ApexClass` or `CustomField`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(pub String);

impl TypeName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for TypeName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TypeName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Diff status of a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChangeStatus {
    AddedOrModified,
    Deleted,
}

impl ChangeStatus {
    /// Classify a `--name-status` code by its first character.
    ///
    /// `A`/`M` → added-or-modified, `D` → deleted, anything else → `None`.
    pub fn from_status_code(code: &str) -> Option<Self> {
        match code.chars().next()? {
            'A' | 'M' => Some(Self::AddedOrModified),
            'D' => Some(Self::Deleted),
            _ => None,
        }
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeStatus::AddedOrModified => write!(f, "added-or-modified"),
            ChangeStatus::Deleted => write!(f, "deleted"),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// Type rules for one metadata directory, as found in the catalog source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataTypeDescriptor {
    /// Conventional folder name for the type (`classes`, `objects`, ...).
    pub directory_name: String,
    pub xml_name: TypeName,
    /// Present iff the type decomposes into child files reported under their own labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_xml_names: Option<Vec<String>>,
    #[serde(default)]
    pub in_folder: bool,
    /// With `in_folder`, use the folder segment alone as the member name.
    #[serde(default)]
    pub use_foldername: bool,
}

impl MetadataTypeDescriptor {
    /// Plain leaf type with no children and no folder scoping.
    pub fn new(directory_name: impl Into<String>, xml_name: impl Into<TypeName>) -> Self {
        Self {
            directory_name: directory_name.into(),
            xml_name: xml_name.into(),
            child_xml_names: None,
            in_folder: false,
            use_foldername: false,
        }
    }

    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.child_xml_names = Some(children.into_iter().map(Into::into).collect());
        self
    }

    pub fn in_folder(mut self, use_foldername: bool) -> Self {
        self.in_folder = true;
        self.use_foldername = use_foldername;
        self
    }

    pub fn has_children(&self) -> bool {
        self.child_xml_names.is_some()
    }
}

/// One path reported by the diff, with its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub path: PathBuf,
    pub status: ChangeStatus,
}

impl FileChange {
    pub fn new(path: impl Into<PathBuf>, status: ChangeStatus) -> Self {
        Self {
            path: path.into(),
            status,
        }
    }
}

/// A resolved `(type, member)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub type_name: TypeName,
    pub member: String,
}

impl Resolution {
    pub fn new(type_name: impl Into<TypeName>, member: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            member: member.into(),
        }
    }
}

/// Metadata type → distinct member names.
///
/// Case is preserved: `Foo` and `foo` are distinct members. Ordering for
/// output is applied by the manifest builder, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    types: BTreeMap<TypeName, BTreeSet<String>>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a member; returns `false` if it was already present.
    pub fn insert(&mut self, type_name: TypeName, member: String) -> bool {
        self.types.entry(type_name).or_default().insert(member)
    }

    pub fn add(&mut self, resolution: Resolution) -> bool {
        self.insert(resolution.type_name, resolution.member)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Number of distinct types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Number of members across all types.
    pub fn member_count(&self) -> usize {
        self.types.values().map(BTreeSet::len).sum()
    }

    pub fn members(&self, type_name: &str) -> Option<&BTreeSet<String>> {
        self.types.get(&TypeName::from(type_name))
    }

    pub fn contains(&self, type_name: &str, member: &str) -> bool {
        self.members(type_name)
            .is_some_and(|members| members.contains(member))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TypeName, &BTreeSet<String>)> {
        self.types.iter()
    }
}

impl Extend<Resolution> for ChangeSet {
    fn extend<T: IntoIterator<Item = Resolution>>(&mut self, iter: T) {
        for resolution in iter {
            self.add(resolution);
        }
    }
}

impl FromIterator<Resolution> for ChangeSet {
    fn from_iter<T: IntoIterator<Item = Resolution>>(iter: T) -> Self {
        let mut set = ChangeSet::new();
        set.extend(iter);
        set
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn status_codes_classify_by_first_char() {
        assert_eq!(ChangeStatus::from_status_code("A"), Some(ChangeStatus::AddedOrModified));
        assert_eq!(ChangeStatus::from_status_code("M"), Some(ChangeStatus::AddedOrModified));
        assert_eq!(ChangeStatus::from_status_code("D"), Some(ChangeStatus::Deleted));
        assert_eq!(ChangeStatus::from_status_code("R100"), None);
        assert_eq!(ChangeStatus::from_status_code("T"), None);
        assert_eq!(ChangeStatus::from_status_code(""), None);
    }

    #[test]
    fn change_set_deduplicates_members() {
        let mut set = ChangeSet::new();
        assert!(set.insert("ApexClass".into(), "Foo".to_string()));
        assert!(!set.insert("ApexClass".into(), "Foo".to_string()));
        assert_eq!(set.len(), 1);
        assert_eq!(set.member_count(), 1);
    }

    #[test]
    fn change_set_preserves_case() {
        let set: ChangeSet = [
            Resolution::new("ApexClass", "Foo"),
            Resolution::new("ApexClass", "foo"),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.member_count(), 2);
        assert!(set.contains("ApexClass", "Foo"));
        assert!(set.contains("ApexClass", "foo"));
        assert!(!set.contains("apexclass", "Foo"));
    }

    #[rstest]
    #[case::in_folder(
        r#"{"directoryName":"reports","xmlName":"Report","inFolder":true,"suffix":"report"}"#,
        MetadataTypeDescriptor::new("reports", "Report").in_folder(false)
    )]
    #[case::folder_name(
        r#"{"directoryName":"territory2Models","xmlName":"Territory2Model","inFolder":true,"useFoldername":true}"#,
        MetadataTypeDescriptor::new("territory2Models", "Territory2Model").in_folder(true)
    )]
    #[case::with_children(
        r#"{"directoryName":"objects","xmlName":"CustomObject","childXmlNames":["CustomField","ListView"]}"#,
        MetadataTypeDescriptor::new("objects", "CustomObject").with_children(["CustomField", "ListView"])
    )]
    #[case::bare(
        r#"{"directoryName":"classes","xmlName":"ApexClass"}"#,
        MetadataTypeDescriptor::new("classes", "ApexClass")
    )]
    fn descriptor_deserializes_camel_case_with_defaults(
        #[case] json: &str,
        #[case] expected: MetadataTypeDescriptor,
    ) {
        let d: MetadataTypeDescriptor = serde_json::from_str(json).expect("parse");
        assert_eq!(d, expected);
    }
}
