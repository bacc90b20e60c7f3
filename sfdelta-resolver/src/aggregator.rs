//! Folding a diff's worth of paths into a [`ChangeSet`].

use std::path::{Path, PathBuf};

use sfdelta_core::{ChangeSet, Resolution, TypeCatalog};

use crate::error::ResolveError;
use crate::resolver::resolve;

/// A path that could not be classified, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unmapped {
    pub path: PathBuf,
    pub reason: ResolveError,
}

/// Outcome of [`aggregate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    pub changes: ChangeSet,
    /// Unclassified paths, in input order.
    pub unmapped: Vec<Unmapped>,
}

/// Resolve against the first root that contains `file_path`.
///
/// Roots are tried in order and the first component-wise prefix match wins,
/// even when a later, more specific root would also match.
pub fn resolve_with_roots<R: AsRef<Path>>(
    file_path: &Path,
    roots: &[R],
    catalog: &TypeCatalog,
) -> Result<Resolution, ResolveError> {
    for root in roots {
        let root: &Path = root.as_ref();
        if file_path.starts_with(root) {
            return resolve(file_path, root, catalog);
        }
    }
    Err(ResolveError::OutsideSourceRoots {
        path: file_path.to_path_buf(),
    })
}

/// Classify every path and accumulate distinct members per type.
///
/// Never fails: unclassifiable paths land in [`Aggregation::unmapped`].
pub fn aggregate<I, P, R>(paths: I, roots: &[R], catalog: &TypeCatalog) -> Aggregation
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
    R: AsRef<Path>,
{
    let mut result = Aggregation::default();
    for path in paths {
        let path = path.as_ref();
        match resolve_with_roots(path, roots, catalog) {
            Ok(resolution) => {
                result.changes.add(resolution);
            }
            Err(reason) => result.unmapped.push(Unmapped {
                path: path.to_path_buf(),
                reason,
            }),
        }
    }
    result
}
