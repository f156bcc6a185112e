//! Duration extraction
//!
//! For one admitted release pair, finds the commits that newly entered the
//! later release and measures each one's distance from the release
//! timestamp. Commit timestamp lookups within a pair carry no ordering
//! dependency, so they run concurrently; the aggregation downstream is
//! commutative.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use futures::future;

use crate::git::GitGateway;
use crate::tags::{parse_instant, Release};

/// Extract the commit ids newly added in the head ref from `git cherry`
/// output.
///
/// Cherry prefixes each line with `+` (new in head) or `-` (an equivalent
/// change already exists upstream); only `+` lines count, and the commit id
/// is the second whitespace-delimited token. Lines that fit neither shape
/// are ignored.
#[must_use]
pub fn newly_added_commits(cherry_output: &str) -> Vec<String> {
    cherry_output
        .lines()
        .filter_map(|line| {
            let mut tokens = line.split_whitespace();
            match (tokens.next(), tokens.next()) {
                (Some("+"), Some(id)) => Some(id.to_string()),
                _ => None,
            }
        })
        .collect()
}

/// Compute cycle-time durations, in seconds, for every commit that newly
/// entered `later` relative to `earlier`.
///
/// Each duration is the absolute difference between the commit's committer
/// timestamp and the later release's timestamp. A gateway failure or an
/// unparseable commit timestamp aborts the whole pair — no partial result.
pub async fn durations_for_pair<G: GitGateway + Sync>(
    git: &G,
    earlier: &Release,
    later: &Release,
) -> Result<Vec<f64>> {
    let cherry_output = git.cherry(&earlier.name, &later.name).await?;
    let commits = newly_added_commits(&cherry_output);

    let lookups = commits.iter().map(|commit| fetch_commit_instant(git, commit));
    let instants = future::try_join_all(lookups).await?;

    Ok(instants
        .into_iter()
        .map(|committed_at| seconds_between(later.timestamp, committed_at))
        .collect())
}

async fn fetch_commit_instant<G: GitGateway + Sync>(
    git: &G,
    commit: &str,
) -> Result<DateTime<Utc>> {
    let raw = git.commit_timestamp(commit).await?;
    parse_instant(&raw)
        .with_context(|| format!("Unparseable timestamp '{}' for commit {commit}", raw.trim()))
}

/// Absolute distance between two instants as fractional seconds.
#[allow(clippy::cast_precision_loss)]
fn seconds_between(a: DateTime<Utc>, b: DateTime<Utc>) -> f64 {
    let millis = (a - b).num_milliseconds().unsigned_abs();
    millis as f64 / 1000.0
}
