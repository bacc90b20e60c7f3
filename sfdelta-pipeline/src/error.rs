//! Error types for sfdelta-pipeline.

use std::path::PathBuf;

use thiserror::Error;

use sfdelta_core::{CatalogError, ProjectError};
use sfdelta_manifest::ManifestError;

/// Failures of the external diff invocation. Always fatal.
#[derive(Debug, Error)]
pub enum DiffError {
    /// The diff program could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The diff program exited unsuccessfully.
    #[error("{program} diff exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },

    /// Output was not valid UTF-8.
    #[error("diff output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// A `--name-status` line without a tab separator.
    #[error("malformed diff line {line_no}: {line:?}")]
    Malformed { line_no: usize, line: String },
}

/// All errors that abort a delta run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("diff error: {0}")]
    Diff(#[from] DiffError),

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("project error: {0}")]
    Project(#[from] ProjectError),

    #[error("manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`PipelineError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> PipelineError {
    PipelineError::Io {
        path: path.into(),
        source,
    }
}
