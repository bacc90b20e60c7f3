//! Error types for sfdelta-core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the metadata type catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read type catalog at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parse error on load; includes file path and serde_json's line context.
    #[error("failed to parse type catalog at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// YAML parse error on load.
    #[error("failed to parse type catalog at {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Errors raised while reading package directories from the project descriptor.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("failed to read project descriptor at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse project descriptor at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `packageDirectories` is absent or empty.
    #[error("package directories not specified in {path}")]
    MissingPackageDirectories { path: PathBuf },

    /// A `packageDirectories` entry has no `path` key.
    #[error("package directory entry #{index} in {path} is missing the \"path\" key")]
    MissingPath { path: PathBuf, index: usize },
}
