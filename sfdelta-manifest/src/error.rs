//! Error types for sfdelta-manifest.

use thiserror::Error;

/// All errors that can arise from manifest rendering.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Tera template engine error (template parse or context conversion).
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),
}
