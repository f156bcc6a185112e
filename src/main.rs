//! Cycletime - git release cycle-time analyzer
//!
//! CLI entry point.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use regex::Regex;

use cycletime::cli::{render_summary, ConsoleReport};
use cycletime::git::{GitCli, SortField};
use cycletime::report::{CycleTimeAnalyzer, ReleaseWindow};
use cycletime::tags::parse_instant;

/// Git release cycle-time analyzer
///
/// Measures the mean elapsed time between commit authorship and the tagged
/// release each commit first appeared in, over all releases inside the
/// given date window.
#[derive(Parser, Debug)]
#[command(name = "cycletime", version, about)]
struct Cli {
    /// Path to the git repository to analyze
    repository: PathBuf,

    /// Start of the analysis window (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    start_date: String,

    /// End of the analysis window; defaults to now
    #[arg(long)]
    end_date: Option<String>,

    /// Regular expression selecting which tags count as releases
    #[arg(long)]
    regexp: String,

    /// Use tag creation dates instead of tagger dates (needed for
    /// lightweight tags, which carry no tagger date)
    #[arg(long)]
    lightweight: bool,
}

/// Resolve the analysis window from CLI arguments.
///
/// Both dates must parse before any git call happens; a missing end date
/// means "now".
fn resolve_window(cli: &Cli) -> Result<ReleaseWindow> {
    let start = parse_instant(&cli.start_date)
        .with_context(|| format!("Invalid --start-date '{}'", cli.start_date))?;
    let end = match &cli.end_date {
        Some(raw) => {
            parse_instant(raw).with_context(|| format!("Invalid --end-date '{raw}'"))?
        }
        None => Utc::now(),
    };
    Ok(ReleaseWindow::new(start, end))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Input validation happens up front, before any git subprocess runs
    let window = resolve_window(&cli)?;
    let pattern =
        Regex::new(&cli.regexp).with_context(|| format!("Invalid --regexp '{}'", cli.regexp))?;
    let sort_field = SortField::for_lightweight(cli.lightweight);

    let git = GitCli::new(&cli.repository);
    let analyzer = CycleTimeAnalyzer::new(window, pattern, sort_field);
    let mut display = ConsoleReport::new();

    let result = analyzer
        .analyze(&git, &mut display)
        .await
        .with_context(|| format!("Failed to analyze '{}'", cli.repository.display()))?;

    render_summary(window, &result);
    Ok(())
}
