//! Run diagnostics as values.
//!
//! The orchestrator reports through an [`EventSink`] instead of writing to a
//! global logger directly, so tests can collect events into a `Vec`.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Orchestrator progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeltaStage {
    Init,
    DiffFetched,
    ClassifiedChanged,
    ClassifiedDeleted,
    WrittenChanged,
    WrittenDestructive,
    Done,
}

/// Which artifact a write refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ManifestKind {
    /// Added or modified members.
    Changed,
    /// Members to delete.
    Destructive,
    /// The empty `package.xml` beside the destructive manifest.
    EmptyCompanion,
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestKind::Changed => write!(f, "changed"),
            ManifestKind::Destructive => write!(f, "destructive"),
            ManifestKind::EmptyCompanion => write!(f, "empty companion"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DeltaEvent {
    Stage { stage: DeltaStage },
    /// A path that could not be classified; the run continues.
    Unmapped { path: PathBuf, reason: String },
    ManifestWritten { kind: ManifestKind, path: PathBuf },
    NoChanges,
    NoDestructiveChanges,
}

pub trait EventSink {
    fn emit(&mut self, event: DeltaEvent);
}

impl EventSink for Vec<DeltaEvent> {
    fn emit(&mut self, event: DeltaEvent) {
        self.push(event);
    }
}

/// Forwards events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&mut self, event: DeltaEvent) {
        match event {
            DeltaEvent::Stage { stage } => tracing::debug!("stage: {stage:?}"),
            DeltaEvent::Unmapped { path, reason } => {
                tracing::warn!("skipping `{}`: {reason}", path.display())
            }
            DeltaEvent::ManifestWritten { kind: ManifestKind::Changed, path } => {
                tracing::info!("Manifest file with additions/changes created at: {}", path.display())
            }
            DeltaEvent::ManifestWritten { kind: ManifestKind::Destructive, path } => {
                tracing::info!("Destructive manifest file created at: {}", path.display())
            }
            DeltaEvent::ManifestWritten { kind, path } => {
                tracing::debug!("wrote {kind} manifest: {}", path.display())
            }
            DeltaEvent::NoChanges => tracing::info!("No metadata additions/changes found."),
            DeltaEvent::NoDestructiveChanges => {
                tracing::info!("No destructive metadata changes found.")
            }
        }
    }
}
