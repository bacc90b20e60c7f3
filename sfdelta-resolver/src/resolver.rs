//! Single-path resolution against one source root.

use std::path::Path;

use sfdelta_core::{Resolution, TypeCatalog};

use crate::error::ResolveError;
use crate::rules::{self, FolderRule, MemberRule, PathParts};

/// Resolve `file_path` below `source_root` to its `(type, member)` pair.
///
/// `source_root` is matched component-wise; a path outside it is
/// [`ResolveError::OutsideSourceRoots`]. Every failure is per-file and
/// recoverable.
pub fn resolve(
    file_path: impl AsRef<Path>,
    source_root: impl AsRef<Path>,
    catalog: &TypeCatalog,
) -> Result<Resolution, ResolveError> {
    let file_path = file_path.as_ref();
    let relative = file_path
        .strip_prefix(source_root.as_ref())
        .map_err(|_| ResolveError::OutsideSourceRoots {
            path: file_path.to_path_buf(),
        })?;

    let first_segment = rules::segments(relative).into_iter().next().unwrap_or_default();
    let descriptor = catalog
        .get(&first_segment)
        .ok_or_else(|| ResolveError::UnknownTypeDirectory {
            path: file_path.to_path_buf(),
            directory: first_segment.clone(),
        })?;

    let parts = PathParts::of(file_path);

    let (type_name, member) = match rules::member_rule(descriptor, &parts) {
        MemberRule::Leaf => (descriptor.xml_name.clone(), rules::leaf_member(&parts)),
        MemberRule::Child => {
            let child = catalog.get(&parts.parent_dir).ok_or_else(|| {
                ResolveError::UnknownChildDirectory {
                    path: file_path.to_path_buf(),
                    directory: parts.parent_dir.clone(),
                }
            })?;
            (child.xml_name.clone(), rules::child_member(&parts))
        }
    };
    let member = rules::strip_metadata_suffixes(&member);

    let member = match rules::folder_rule(descriptor) {
        FolderRule::Unscoped => member,
        FolderRule::Prefixed => rules::prefixed_member(&parts, &member),
        FolderRule::FolderName => rules::folder_name_member(relative).unwrap_or_default(),
    };

    if member.is_empty() {
        return Err(ResolveError::EmptyMember {
            path: file_path.to_path_buf(),
        });
    }

    Ok(Resolution { type_name, member })
}

#[cfg(test)]
mod tests {
    use sfdelta_core::MetadataTypeDescriptor;

    use super::*;

    const ROOT: &str = "force-app/main/default";

    fn catalog() -> TypeCatalog {
        TypeCatalog::from_descriptors([
            MetadataTypeDescriptor::new("classes", "ApexClass"),
            MetadataTypeDescriptor::new("objects", "CustomObject").with_children(["CustomField"]),
            MetadataTypeDescriptor::new("fields", "CustomField"),
            MetadataTypeDescriptor::new("reports", "Report").in_folder(false),
        ])
    }

    #[test]
    fn leaf_class() {
        let r = resolve(format!("{ROOT}/classes/Foo.cls"), ROOT, &catalog()).expect("resolve");
        assert_eq!(r, Resolution::new("ApexClass", "Foo"));
    }

    #[test]
    fn path_outside_root() {
        let err = resolve("other/classes/Foo.cls", ROOT, &catalog()).unwrap_err();
        assert!(matches!(err, ResolveError::OutsideSourceRoots { .. }));
    }

    #[test]
    fn root_match_is_component_wise() {
        let err = resolve("force-app/main/defaultX/classes/Foo.cls", ROOT, &catalog()).unwrap_err();
        assert!(matches!(err, ResolveError::OutsideSourceRoots { .. }));
    }

    #[test]
    fn unknown_type_directory() {
        let err = resolve(format!("{ROOT}/widgets/Foo.widget"), ROOT, &catalog()).unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnknownTypeDirectory {
                path: format!("{ROOT}/widgets/Foo.widget").into(),
                directory: "widgets".to_string(),
            }
        );
    }

    #[test]
    fn unknown_child_directory() {
        let err = resolve(
            format!("{ROOT}/objects/Account/compactLayouts/Small.compactLayout-meta.xml"),
            ROOT,
            &catalog(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ResolveError::UnknownChildDirectory { ref directory, .. } if directory == "compactLayouts"
        ));
    }

    #[test]
    fn empty_member_is_rejected() {
        let err = resolve(format!("{ROOT}/classes/meta.xml"), ROOT, &catalog()).unwrap_err();
        assert!(matches!(err, ResolveError::EmptyMember { .. }));
    }
}
