//! # sfdelta-pipeline
//!
//! Diff-to-manifest orchestration.
//!
//! Call [`pipeline::run`] with a [`DiffSource`] (normally [`GitDiffSource`]),
//! the loaded type catalog, and a [`DeltaConfig`] to write the additions
//! manifest and, when files were deleted, the destructive-changes pair.

pub mod diff_source;
pub mod error;
pub mod events;
pub mod pipeline;
pub mod writer;

pub use diff_source::{DiffEntry, DiffSource, GitDiffSource};
pub use error::{DiffError, PipelineError};
pub use events::{DeltaEvent, DeltaStage, EventSink, LogSink, ManifestKind};
pub use pipeline::{run, run_with, DeltaConfig, DeltaReport, SourceRoots, WrittenManifest};
