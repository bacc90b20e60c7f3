//! Manifest: the ordered rendering payload built from a [`ChangeSet`].

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use sfdelta_core::ChangeSet;

use crate::error::ManifestError;

/// One `<types>` block: sorted members followed by the type label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeBlock {
    pub name: String,
    pub members: Vec<String>,
}

/// Ordered `(type, members)` pairs, fixed once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub types: Vec<TypeBlock>,
}

impl Manifest {
    /// The zero-type manifest paired with destructive changes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Order types and members case-insensitively ascending.
    ///
    /// Names equal ignoring case fall back to byte order so the output stays
    /// deterministic.
    pub fn from_change_set(changes: &ChangeSet) -> Self {
        let mut types: Vec<TypeBlock> = changes
            .iter()
            .map(|(name, members)| {
                let mut members: Vec<String> = members.iter().cloned().collect();
                members.sort_by(|a, b| case_insensitive(a, b));
                TypeBlock {
                    name: name.to_string(),
                    members,
                }
            })
            .collect();
        types.sort_by(|a, b| case_insensitive(&a.name, &b.name));
        Self { types }
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn to_tera_context(&self) -> Result<tera::Context, ManifestError> {
        tera::Context::from_serialize(self).map_err(ManifestError::from)
    }
}

fn case_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use sfdelta_core::Resolution;

    use super::*;

    fn one_type(members: &[&str]) -> ChangeSet {
        members
            .iter()
            .map(|m| Resolution::new("ApexClass", *m))
            .collect()
    }

    #[rstest]
    #[case::mixed_case(&["Zeta", "alpha"], &["alpha", "Zeta"])]
    #[case::case_variants_kept(&["foo", "Foo"], &["Foo", "foo"])]
    #[case::underscore_and_digits(&["b_2", "B_10", "a"], &["a", "B_10", "b_2"])]
    #[case::dotted_and_scoped(&["Sales/Q2", "sales/Q1", "Account.Z"], &["Account.Z", "sales/Q1", "Sales/Q2"])]
    fn members_sort_case_insensitively(#[case] input: &[&str], #[case] expected: &[&str]) {
        let manifest = Manifest::from_change_set(&one_type(input));
        assert_eq!(manifest.types[0].members, expected);
    }

    #[rstest]
    #[case::lowercase_first_letter(&["Layout", "apexPage", "CustomField"], &["apexPage", "CustomField", "Layout"])]
    #[case::already_ordered(&["ApexClass", "Report"], &["ApexClass", "Report"])]
    fn types_sort_case_insensitively(#[case] input: &[&str], #[case] expected: &[&str]) {
        let changes: ChangeSet = input.iter().map(|t| Resolution::new(*t, "M")).collect();
        let names: Vec<String> = Manifest::from_change_set(&changes)
            .types
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn empty_change_set_is_empty_manifest() {
        assert_eq!(Manifest::from_change_set(&ChangeSet::new()), Manifest::empty());
        assert!(Manifest::empty().to_tera_context().is_ok());
    }
}
