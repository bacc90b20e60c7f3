//! Per-file resolution failures.
//!
//! None of these abort a run: the aggregator records them and moves on.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The path is not below any configured source root.
    #[error("`{path}` is not under any source folder")]
    OutsideSourceRoots { path: PathBuf },

    /// The first folder below the source root has no catalog entry.
    #[error("no matching directory `{directory}` found for `{path}` in the type catalog")]
    UnknownTypeDirectory { path: PathBuf, directory: String },

    /// A decomposed child file whose containing folder has no catalog entry.
    #[error("no matching child directory `{directory}` found for `{path}` in the type catalog")]
    UnknownChildDirectory { path: PathBuf, directory: String },

    /// Every segment of the member name was stripped away.
    #[error("no member name could be derived from `{path}`")]
    EmptyMember { path: PathBuf },
}

impl ResolveError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ResolveError::OutsideSourceRoots { path }
            | ResolveError::UnknownTypeDirectory { path, .. }
            | ResolveError::UnknownChildDirectory { path, .. }
            | ResolveError::EmptyMember { path } => path,
        }
    }
}
