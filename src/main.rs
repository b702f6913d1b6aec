//! pagesim - compare page replacement policies from the command line.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser as ClapParser;
use pagesim::{
    load_pages, parse_pages, run_interactive, PolicyKind, Session, SessionOptions, SimConfig,
    TraceReporter, MAX_REFERENCES,
};

/// Simulate FIFO, LRU and Optimal page replacement over a reference sequence.
///
/// Without --frames, prompts for the frame count and references on stdin.
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of page frames
    #[arg(short, long)]
    frames: Option<usize>,

    /// Page references, separated by spaces or commas
    #[arg(short, long)]
    pages: Option<String>,

    /// Read page references from a file (before any --pages)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Only run one policy (fifo, lru, optimal)
    #[arg(long)]
    policy: Option<PolicyKind>,

    /// Print totals without per-step tables
    #[arg(short, long)]
    summary: bool,

    /// Maximum length of the reference sequence
    #[arg(long, default_value_t = MAX_REFERENCES)]
    max_references: usize,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let Some(frames_count) = args.frames else {
        if args.pages.is_some() || args.file.is_some() || args.policy.is_some() {
            bail!("--frames is required when references are given on the command line");
        }
        let options = SessionOptions {
            max_references: args.max_references,
            summary_only: args.summary,
        };
        let stdin = io::stdin();
        run_interactive(stdin.lock(), io::stdout().lock(), options)
            .context("Interactive session failed")?;
        return Ok(());
    };

    let config = SimConfig::new(frames_count)?.with_max_references(args.max_references);
    let mut session = Session::new(config);

    if let Some(path) = &args.file {
        let pages = load_pages(path)
            .with_context(|| format!("Failed to read references from {}", path.display()))?;
        session.extend(&pages)?;
    }
    if let Some(text) = &args.pages {
        let pages = parse_pages(text).context("Failed to parse --pages")?;
        session.extend(&pages)?;
    }

    let stdout = io::stdout();
    let mut reporter = TraceReporter::new(stdout.lock());
    if args.summary {
        reporter = reporter.summary_only();
    }

    match args.policy {
        Some(kind) => {
            let eval = session.evaluate(kind)?;
            reporter.write_evaluation(&eval)?;
        }
        None => {
            let cmp = session.compare()?;
            reporter.write_comparison(&cmp)?;
        }
    }
    reporter.into_inner().flush()?;

    Ok(())
}
