//! sfdelta: deployment manifests from a git diff.
//!
//! # Usage
//!
//! ```text
//! sfdelta delta --from <rev> --to <rev> [--json metadata.json] [--manifest package.xml]
//!               [--directory <root>]... [--project sfdx-project.json]
//!               [--destructive-dir destructiveChanges] [--repo .]
//! sfdelta resolve <path>... [--json metadata.json] [--directory <root>]...
//!               [--project sfdx-project.json] [--format table|json]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{delta::DeltaArgs, resolve::ResolveArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "sfdelta",
    version,
    about = "Build deployment manifests from the metadata changed between two git revisions",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Diff two revisions and write package.xml plus the destructive-changes pair.
    Delta(DeltaArgs),

    /// Show the metadata type and member each path resolves to.
    Resolve(ResolveArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Delta(args) => args.run(),
        Commands::Resolve(args) => args.run(),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
