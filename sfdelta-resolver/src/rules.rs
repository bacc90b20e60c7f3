//! Naming rules, one pure function per rule.
//!
//! A resolution is two independent decisions taken from the type descriptor
//! and the shape of the path:
//!
//! | Decision      | Inputs                                      | Outcomes                    |
//! |---------------|---------------------------------------------|-----------------------------|
//! | [`MemberRule`]| `childXmlNames` set, parent dir vs. stem    | `Leaf`, `Child`             |
//! | [`FolderRule`]| `inFolder`, `useFoldername`                 | `Unscoped`, `Prefixed`, `FolderName` |
//!
//! The member rule runs first and its result passes through
//! [`strip_metadata_suffixes`]; the folder rule then wraps or replaces it.

use std::path::{Component, Path};

use sfdelta_core::MetadataTypeDescriptor;

/// Dot-segments containing any of these are metadata-file suffixes, not name parts.
const SUFFIX_MARKERS: [&str; 3] = ["meta", "xml", "svg"];

// ---------------------------------------------------------------------------
// Path decomposition
// ---------------------------------------------------------------------------

/// The pieces of a file path the naming rules look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParts {
    /// Full file name, e.g. `MyField.field-meta.xml`.
    pub file_name: String,
    /// Name of the immediate containing directory, or `""`.
    pub parent_dir: String,
    /// Name of the directory containing `parent_dir`, or `""`.
    pub grandparent_dir: String,
}

impl PathParts {
    pub fn of(path: &Path) -> Self {
        let parent = path.parent();
        let grandparent = parent.and_then(Path::parent);
        Self {
            file_name: name_of(Some(path)),
            parent_dir: name_of(parent),
            grandparent_dir: name_of(grandparent),
        }
    }

    /// File name up to the first dot: `MyField.field-meta.xml` → `MyField`.
    pub fn stem_to_first_dot(&self) -> &str {
        self.file_name.split('.').next().unwrap_or_default()
    }

    /// File name without its final extension: `Foo.cls-meta.xml` → `Foo.cls-meta`.
    pub fn stem_without_last_extension(&self) -> String {
        Path::new(&self.file_name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

fn name_of(path: Option<&Path>) -> String {
    path.and_then(Path::file_name)
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Normal (non-`.`/`..`/root) components of a relative path, as strings.
pub fn segments(relative: &Path) -> Vec<String> {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Member rule
// ---------------------------------------------------------------------------

/// How the base member name is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberRule {
    /// Name taken from the file itself, reported under the descriptor's type.
    Leaf,
    /// Decomposed child file: `{grandparent}.{stem}`, reported under the
    /// type registered for its containing folder.
    Child,
}

/// Child only when the type decomposes *and* the file sits one level below
/// a folder that is not its own same-named container.
pub fn member_rule(descriptor: &MetadataTypeDescriptor, parts: &PathParts) -> MemberRule {
    if descriptor.has_children() && parts.parent_dir != parts.stem_to_first_dot() {
        MemberRule::Child
    } else {
        MemberRule::Leaf
    }
}

pub fn leaf_member(parts: &PathParts) -> String {
    parts.stem_without_last_extension()
}

pub fn child_member(parts: &PathParts) -> String {
    format!("{}.{}", parts.grandparent_dir, parts.stem_to_first_dot())
}

/// Drop every dot-segment containing `meta`, `xml` or `svg`.
///
/// Idempotent: filtering an already-filtered name returns it unchanged.
pub fn strip_metadata_suffixes(name: &str) -> String {
    name.split('.')
        .filter(|part| !SUFFIX_MARKERS.iter().any(|marker| part.contains(marker)))
        .collect::<Vec<_>>()
        .join(".")
}

// ---------------------------------------------------------------------------
// Folder rule
// ---------------------------------------------------------------------------

/// How folder-scoped types fold their folder into the member name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderRule {
    Unscoped,
    /// `{containing folder}/{member}`.
    Prefixed,
    /// The segment right after the type folder, extension stripped, replaces
    /// the member entirely.
    FolderName,
}

pub fn folder_rule(descriptor: &MetadataTypeDescriptor) -> FolderRule {
    match (descriptor.in_folder, descriptor.use_foldername) {
        (false, _) => FolderRule::Unscoped,
        (true, false) => FolderRule::Prefixed,
        (true, true) => FolderRule::FolderName,
    }
}

pub fn prefixed_member(parts: &PathParts, member: &str) -> String {
    format!("{}/{}", parts.parent_dir, member)
}

/// Segment following the type folder in `relative`, cut at its first dot.
///
/// `None` when the relative path has no segment after the type folder.
pub fn folder_name_member(relative: &Path) -> Option<String> {
    segments(relative)
        .get(1)
        .map(|segment| segment.split('.').next().unwrap_or_default().to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
