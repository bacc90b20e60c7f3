//! `sfdelta delta`: diff two revisions and write the manifests.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use sfdelta_pipeline::{pipeline, DeltaConfig, DeltaReport, GitDiffSource, LogSink};

use super::RootArgs;

/// Arguments for `sfdelta delta`.
#[derive(Args, Debug)]
pub struct DeltaArgs {
    /// Base revision.
    #[arg(short, long)]
    pub from: String,

    /// Target revision.
    #[arg(short, long)]
    pub to: String,

    /// Metadata type catalog (JSON, or YAML by extension).
    #[arg(short = 'j', long = "json", default_value = "metadata.json")]
    pub catalog: PathBuf,

    /// Output path for the additions/changes manifest.
    #[arg(short, long, default_value = "package.xml")]
    pub manifest: PathBuf,

    /// Directory receiving destructiveChanges.xml and its empty package.xml.
    #[arg(long, default_value = "destructiveChanges")]
    pub destructive_dir: PathBuf,

    /// Repository to run git in.
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    #[command(flatten)]
    pub roots: RootArgs,
}

impl DeltaArgs {
    pub fn run(self) -> Result<()> {
        let config = DeltaConfig {
            from: self.from.clone(),
            to: self.to.clone(),
            catalog_path: self.catalog,
            roots: self.roots.source_roots(),
            manifest_path: self.manifest,
            destructive_dir: self.destructive_dir,
        };
        let source = GitDiffSource::new(self.repo);

        let report = pipeline::run(&source, &config, &mut LogSink)
            .with_context(|| format!("delta failed for {}..{}", self.from, self.to))?;

        print_report(&report);
        Ok(())
    }
}

fn print_report(report: &DeltaReport) {
    match &report.changed {
        Some(m) => println!(
            "{} {} ({} types, {} members)",
            "✓".green().bold(),
            m.path.display(),
            m.types,
            m.members
        ),
        None => println!("{} no additions/changes", "·".dimmed()),
    }
    match &report.destructive {
        Some(m) => println!(
            "{} {} ({} types, {} members)",
            "✗".red().bold(),
            m.path.display(),
            m.types,
            m.members
        ),
        None => println!("{} no destructive changes", "·".dimmed()),
    }
    if !report.unmapped.is_empty() {
        println!(
            "{} {} file(s) had no matching metadata type",
            "!".yellow().bold(),
            report.unmapped.len()
        );
    }
}
