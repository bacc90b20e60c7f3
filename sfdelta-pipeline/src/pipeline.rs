//! Delta run: diff → classify → manifests.
//!
//! ```text
//! Init → DiffFetched → ClassifiedChanged → ClassifiedDeleted? → WrittenChanged? → WrittenDestructive? → Done
//! ```
//!
//! Any error aborts the run; nothing is retried. Zero changed or zero
//! deleted files are not errors, they only suppress the matching output.

use std::path::{Path, PathBuf};

use serde::Serialize;

use sfdelta_core::{project, ChangeSet, TypeCatalog};
use sfdelta_manifest::{Manifest, ManifestBuilder};
use sfdelta_resolver::{aggregate, Aggregation};

use crate::diff_source::{classify, split_changes, DiffSource};
use crate::error::PipelineError;
use crate::events::{DeltaEvent, DeltaStage, EventSink, ManifestKind};
use crate::writer;

/// File name of the destructive manifest inside the destructive directory.
pub const DESTRUCTIVE_FILE: &str = "destructiveChanges.xml";
/// File name of the always-empty companion manifest.
pub const EMPTY_PACKAGE_FILE: &str = "package.xml";

/// Where source roots come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRoots {
    /// Explicit roots, tried in the given order.
    Explicit(Vec<String>),
    /// `packageDirectories` of the project descriptor at this path.
    Project(PathBuf),
}

impl SourceRoots {
    pub fn load(&self) -> Result<Vec<String>, PipelineError> {
        match self {
            SourceRoots::Explicit(roots) => Ok(roots.clone()),
            SourceRoots::Project(path) => Ok(project::load_package_directories(path)?),
        }
    }
}

/// Inputs for one run.
#[derive(Debug, Clone)]
pub struct DeltaConfig {
    pub from: String,
    pub to: String,
    pub catalog_path: PathBuf,
    pub roots: SourceRoots,
    /// Additions/changes manifest.
    pub manifest_path: PathBuf,
    /// Receives `destructiveChanges.xml` and the empty `package.xml`.
    pub destructive_dir: PathBuf,
}

/// A manifest the run wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenManifest {
    pub path: PathBuf,
    pub types: usize,
    pub members: usize,
}

/// What a run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeltaReport {
    pub changed: Option<WrittenManifest>,
    pub destructive: Option<WrittenManifest>,
    /// Paths skipped from either set, in processing order.
    pub unmapped: Vec<PathBuf>,
}

/// Load the catalog and roots named in `config`, then run.
pub fn run(
    source: &dyn DiffSource,
    config: &DeltaConfig,
    sink: &mut dyn EventSink,
) -> Result<DeltaReport, PipelineError> {
    let catalog = TypeCatalog::load(&config.catalog_path)?;
    let roots = config.roots.load()?;
    tracing::debug!(
        "loaded {} catalog entries, {} source root(s)",
        catalog.len(),
        roots.len()
    );
    run_with(source, &catalog, &roots, config, sink)
}

/// Run with an already-loaded catalog and root list.
pub fn run_with(
    source: &dyn DiffSource,
    catalog: &TypeCatalog,
    roots: &[String],
    config: &DeltaConfig,
    sink: &mut dyn EventSink,
) -> Result<DeltaReport, PipelineError> {
    let mut report = DeltaReport::default();
    sink.emit(DeltaEvent::Stage { stage: DeltaStage::Init });

    let entries = source.diff(&config.from, &config.to)?;
    let (changed_paths, deleted_paths) = split_changes(classify(&entries, roots));
    sink.emit(DeltaEvent::Stage { stage: DeltaStage::DiffFetched });

    let changed = aggregate(&changed_paths, roots, catalog);
    record_unmapped(&changed, &mut report, sink);
    sink.emit(DeltaEvent::Stage { stage: DeltaStage::ClassifiedChanged });

    let deleted = if deleted_paths.is_empty() {
        None
    } else {
        let deleted = aggregate(&deleted_paths, roots, catalog);
        record_unmapped(&deleted, &mut report, sink);
        sink.emit(DeltaEvent::Stage { stage: DeltaStage::ClassifiedDeleted });
        Some(deleted)
    };

    let builder = ManifestBuilder::new()?;

    if changed.changes.is_empty() {
        sink.emit(DeltaEvent::NoChanges);
    } else {
        let written = write_manifest(&builder, &changed.changes, &config.manifest_path)?;
        sink.emit(DeltaEvent::ManifestWritten {
            kind: ManifestKind::Changed,
            path: written.path.clone(),
        });
        report.changed = Some(written);
        sink.emit(DeltaEvent::Stage { stage: DeltaStage::WrittenChanged });
    }

    match deleted {
        None => sink.emit(DeltaEvent::NoDestructiveChanges),
        Some(deleted) => {
            writer::ensure_dir(&config.destructive_dir)?;

            let destructive_path = config.destructive_dir.join(DESTRUCTIVE_FILE);
            let written = write_manifest(&builder, &deleted.changes, &destructive_path)?;

            let companion = config.destructive_dir.join(EMPTY_PACKAGE_FILE);
            writer::atomic_write(&companion, &builder.render(&Manifest::empty())?)?;
            sink.emit(DeltaEvent::ManifestWritten {
                kind: ManifestKind::EmptyCompanion,
                path: companion,
            });

            sink.emit(DeltaEvent::ManifestWritten {
                kind: ManifestKind::Destructive,
                path: written.path.clone(),
            });
            report.destructive = Some(written);
            sink.emit(DeltaEvent::Stage { stage: DeltaStage::WrittenDestructive });
        }
    }

    sink.emit(DeltaEvent::Stage { stage: DeltaStage::Done });
    Ok(report)
}

fn record_unmapped(aggregation: &Aggregation, report: &mut DeltaReport, sink: &mut dyn EventSink) {
    for unmapped in &aggregation.unmapped {
        sink.emit(DeltaEvent::Unmapped {
            path: unmapped.path.clone(),
            reason: unmapped.reason.to_string(),
        });
        report.unmapped.push(unmapped.path.clone());
    }
}

fn write_manifest(
    builder: &ManifestBuilder,
    changes: &ChangeSet,
    path: &Path,
) -> Result<WrittenManifest, PipelineError> {
    let xml = builder.render_change_set(changes)?;
    writer::atomic_write(path, &xml)?;
    Ok(WrittenManifest {
        path: path.to_path_buf(),
        types: changes.len(),
        members: changes.member_count(),
    })
}
