pub mod delta;
pub mod resolve;

use std::path::PathBuf;

use clap::Args;

use sfdelta_core::project::PROJECT_FILE;
use sfdelta_pipeline::SourceRoots;

/// Source-root selection shared by every subcommand.
#[derive(Args, Debug)]
pub struct RootArgs {
    /// Source folder to classify against (repeatable; overrides --project).
    #[arg(short = 'd', long = "directory")]
    pub directories: Vec<String>,

    /// Project descriptor whose packageDirectories supply the source folders.
    #[arg(long, default_value = PROJECT_FILE)]
    pub project: PathBuf,
}

impl RootArgs {
    pub fn source_roots(&self) -> SourceRoots {
        if self.directories.is_empty() {
            SourceRoots::Project(self.project.clone())
        } else {
            SourceRoots::Explicit(self.directories.clone())
        }
    }
}
