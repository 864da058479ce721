//! Rule mutator CLI.
//!
//! Mutates one random line of one `NNN-*.md` rule document under
//! `.cursor/rules/` and writes the result to `zzz-experimental.mdc` in the same
//! directory. Front-matter is never touched.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use devflow::core::front_matter::HeaderPolicy;
use devflow::core::selection::RandomChooser;
use devflow::evolve::{EvolveOptions, EvolveOutcome, evolve};
use devflow::exit_codes;
use devflow::io::config::load_config;
use devflow::io::paths::{ProjectPaths, discover_root_from_cwd};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "prompt-evolve",
    version,
    about = "Mutate one line of a random rule document into zzz-experimental.mdc"
)]
struct Cli {
    /// Project root (defaults to the nearest ancestor that looks like a project).
    #[arg(long)]
    root: Option<PathBuf>,

    /// Seed the random choices for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Skip documents whose front-matter is opened but never closed.
    #[arg(long)]
    strict_front_matter: bool,

    /// Print the mutated document instead of writing it.
    #[arg(long)]
    dry_run: bool,
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

    let mut options = EvolveOptions::from_config(paths, &cfg.evolve);
    if cli.strict_front_matter {
        options.header_policy = HeaderPolicy::Strict;
    }
    options.dry_run = cli.dry_run;

    let mut chooser = match cli.seed {
        Some(seed) => RandomChooser::seeded(seed),
        None => RandomChooser::from_entropy(),
    };
    let outcome = evolve(&options, &mut chooser)?;
    if let EvolveOutcome::Mutated(report) = &outcome
        && cli.dry_run
    {
        print!("{}", report.contents);
        if !report.contents.ends_with('\n') {
            println!();
        }
    }
    println!("{}", outcome.message());
    Ok(())
}
