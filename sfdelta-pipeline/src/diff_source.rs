//! Diff sources: where the `(status, path)` pairs come from.
//!
//! [`GitDiffSource`] shells out to `git diff --name-status` and buffers the
//! whole output before anything is classified. Tests substitute any closure
//! with the [`DiffSource`] signature.

use std::path::PathBuf;
use std::process::Command;

use sfdelta_core::{ChangeStatus, FileChange};

use crate::error::DiffError;

/// One line of `--name-status` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    /// Raw status code (`A`, `M`, `D`, `R100`, ...).
    pub status: String,
    pub path: String,
}

impl DiffEntry {
    pub fn new(status: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            path: path.into(),
        }
    }
}

/// Narrow interface over the version-control diff.
pub trait DiffSource {
    /// All changed files between `from` and `to`, in diff order.
    fn diff(&self, from: &str, to: &str) -> Result<Vec<DiffEntry>, DiffError>;
}

impl<F> DiffSource for F
where
    F: Fn(&str, &str) -> Result<Vec<DiffEntry>, DiffError>,
{
    fn diff(&self, from: &str, to: &str) -> Result<Vec<DiffEntry>, DiffError> {
        self(from, to)
    }
}

// ---------------------------------------------------------------------------
// git
// ---------------------------------------------------------------------------

/// `git diff <from> <to> --name-status`, run inside `repo`.
#[derive(Debug, Clone)]
pub struct GitDiffSource {
    repo: PathBuf,
    program: String,
}

impl GitDiffSource {
    pub fn new(repo: impl Into<PathBuf>) -> Self {
        Self {
            repo: repo.into(),
            program: "git".to_string(),
        }
    }

    /// Use a different git executable.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

impl DiffSource for GitDiffSource {
    fn diff(&self, from: &str, to: &str) -> Result<Vec<DiffEntry>, DiffError> {
        tracing::debug!("running {} diff {from} {to} in {}", self.program, self.repo.display());
        let output = Command::new(&self.program)
            .current_dir(&self.repo)
            .args(["-c", "core.quotepath=off", "diff", from, to, "--name-status"])
            .output()
            .map_err(|e| DiffError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(DiffError::Failed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout)?;
        parse_name_status(&stdout)
    }
}

// ---------------------------------------------------------------------------
// Parsing and filtering
// ---------------------------------------------------------------------------

/// Parse `--name-status` output. Blank lines are skipped; a line without a
/// tab is an error.
///
/// For rename/copy lines (`R100\told\tnew`) everything after the first tab is
/// kept as the path; those statuses are dropped later by [`classify`].
pub fn parse_name_status(stdout: &str) -> Result<Vec<DiffEntry>, DiffError> {
    let mut entries = Vec::new();
    for (idx, line) in stdout.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let Some((status, path)) = line.split_once('\t') else {
            return Err(DiffError::Malformed {
                line_no: idx + 1,
                line: line.to_string(),
            });
        };
        entries.push(DiffEntry::new(status.trim(), path));
    }
    Ok(entries)
}

/// Keep entries under any of `roots` (plain string prefix) whose status is
/// added, modified or deleted.
pub fn classify<R: AsRef<str>>(entries: &[DiffEntry], roots: &[R]) -> Vec<FileChange> {
    entries
        .iter()
        .filter(|e| {
            roots.iter().any(|root| {
                let root: &str = root.as_ref();
                e.path.starts_with(root)
            })
        })
        .filter_map(|e| {
            ChangeStatus::from_status_code(&e.status).map(|status| FileChange::new(&e.path, status))
        })
        .collect()
}

/// Partition into `(added_or_modified, deleted)`, keeping diff order.
pub fn split_changes(changes: Vec<FileChange>) -> (Vec<PathBuf>, Vec<PathBuf>) {
    let mut changed = Vec::new();
    let mut deleted = Vec::new();
    for change in changes {
        match change.status {
            ChangeStatus::AddedOrModified => changed.push(change.path),
            ChangeStatus::Deleted => deleted.push(change.path),
        }
    }
    (changed, deleted)
}
