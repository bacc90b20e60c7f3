//! `sfdelta resolve`: classify paths without touching git.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use sfdelta_core::TypeCatalog;
use sfdelta_resolver::resolve_with_roots;

use super::RootArgs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Arguments for `sfdelta resolve`.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Repository-relative file paths.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Metadata type catalog (JSON, or YAML by extension).
    #[arg(short = 'j', long = "json", default_value = "metadata.json")]
    pub catalog: PathBuf,

    #[command(flatten)]
    pub roots: RootArgs,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize, Tabled)]
struct ResolveRow {
    #[tabled(rename = "path")]
    path: String,
    #[tabled(rename = "type", display_with = "display_opt")]
    #[serde(rename = "type")]
    type_name: Option<String>,
    #[tabled(rename = "member", display_with = "display_opt")]
    member: Option<String>,
    #[tabled(rename = "error", display_with = "display_opt")]
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn display_opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

impl ResolveArgs {
    pub fn run(self) -> Result<()> {
        let catalog = TypeCatalog::load(&self.catalog)
            .with_context(|| format!("failed to load catalog {}", self.catalog.display()))?;
        let roots = self
            .roots
            .source_roots()
            .load()
            .context("failed to determine source folders")?;

        let rows: Vec<ResolveRow> = self
            .paths
            .iter()
            .map(|path| build_row(path, &roots, &catalog))
            .collect();

        match self.format {
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&rows).context("failed to serialize JSON")?
            ),
            OutputFormat::Table => {
                let mut table = Table::new(rows);
                table.with(Style::rounded());
                println!("{table}");
            }
        }
        Ok(())
    }
}

fn build_row(path: &Path, roots: &[String], catalog: &TypeCatalog) -> ResolveRow {
    match resolve_with_roots(path, roots, catalog) {
        Ok(r) => ResolveRow {
            path: path.display().to_string(),
            type_name: Some(r.type_name.0),
            member: Some(r.member),
            error: None,
        },
        Err(e) => ResolveRow {
            path: path.display().to_string(),
            type_name: None,
            member: None,
            error: Some(e.to_string()),
        },
    }
}
