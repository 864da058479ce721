//! Progress reporter CLI.
//!
//! Counts `T*.md` task files in `project/tasks/{todo,in_progress}` and anywhere
//! below `done/`, then replaces `project/PROGRESS_REPORT.md` with a fixed table.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use devflow::exit_codes;
use devflow::io::config::load_config;
use devflow::io::paths::{ProjectPaths, discover_root_from_cwd};
use devflow::progress::{ReportOptions, generate_report};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "progress-report",
    version,
    about = "Summarise task folders into project/PROGRESS_REPORT.md"
)]
struct Cli {
    /// Project root (defaults to the nearest ancestor that looks like a project).
    #[arg(long)]
    root: Option<PathBuf>,

    /// Print the report instead of writing it.
    #[arg(long)]
    dry_run: bool,

    /// Also print the metrics as `key=value` pairs.
    #[arg(long)]
    summary: bool,
}

fn main() {
    devflow::logging::init();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run(cli: Cli) -> Result<()> {
    let root = discover_root_from_cwd(cli.root.as_deref())?;
    let cfg = load_config(&ProjectPaths::new(&root).config_path)?;
    let paths = ProjectPaths::with_config(&root, &cfg);
    debug!(root = %paths.root.display(), "resolved project root");

    let outcome = generate_report(&ReportOptions {
        paths,
        dry_run: cli.dry_run,
    })?;
    if cli.dry_run {
        print!("{}", outcome.rendered);
    } else {
        println!("{}", outcome.confirmation());
    }
    if cli.summary {
        println!("{}", outcome.counts);
    }
    Ok(())
}
