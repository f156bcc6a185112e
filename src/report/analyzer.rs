//! Cycle-time report builder
//!
//! Drives the full pipeline for one invocation: list tags, select and pair
//! releases, admit pairs through the window, extract per-pair durations,
//! and aggregate. Pairs are processed strictly in chronological order and
//! each pair's own mean is streamed to the sink as soon as it is computed,
//! before the next pair's git queries begin.

use anyhow::Result;
use regex::Regex;

use crate::git::{GitGateway, SortField};
use crate::report::durations::durations_for_pair;
use crate::report::stats::{mean, seconds_to_hours};
use crate::report::window::ReleaseWindow;
use crate::tags::{pair_releases, select_releases, Release};

/// Final aggregate of one analyzer run.
///
/// `cycle_time_hours` is NaN when no admitted pair produced any duration —
/// "no data", deliberately distinct from a mean of zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleTimeResult {
    /// Grand mean cycle time over every newly-added commit, in hours.
    pub cycle_time_hours: f64,
    /// Number of release pairs admitted by the window.
    pub release_count: usize,
}

/// Receives each admitted pair's mean as soon as it is computed.
///
/// The console implementation prints a line per pair; tests record the
/// calls to assert on streaming order.
pub trait ReportSink {
    /// One admitted pair has been fully measured.
    fn pair_done(&mut self, earlier: &Release, later: &Release, mean_hours: f64);
}

/// One-shot cycle-time analyzer for a single repository.
#[derive(Debug)]
pub struct CycleTimeAnalyzer {
    window: ReleaseWindow,
    pattern: Regex,
    sort_field: SortField,
}

impl CycleTimeAnalyzer {
    /// Create an analyzer for the given window, release pattern, and tag
    /// date field.
    #[must_use]
    pub const fn new(window: ReleaseWindow, pattern: Regex, sort_field: SortField) -> Self {
        Self {
            window,
            pattern,
            sort_field,
        }
    }

    /// Run the full pipeline against the gateway.
    ///
    /// Any gateway failure aborts immediately; lines already streamed to
    /// the sink stay streamed, but no result is produced. Zero admitted
    /// pairs is not an error: the result carries a count of 0 and a NaN
    /// mean.
    pub async fn analyze<G, S>(&self, git: &G, sink: &mut S) -> Result<CycleTimeResult>
    where
        G: GitGateway + Sync,
        S: ReportSink,
    {
        let raw_tags = git.list_tags(self.sort_field).await?;
        let releases = select_releases(&raw_tags, &self.pattern, self.window.end);
        let pairs = pair_releases(releases);

        let mut all_durations = Vec::new();
        let mut release_count = 0;

        for pair in pairs.iter().filter(|p| self.window.admits(p)) {
            // admits() guarantees a later release
            let Some(later) = pair.later.as_ref() else {
                continue;
            };

            let durations = durations_for_pair(git, &pair.earlier, later).await?;
            sink.pair_done(&pair.earlier, later, seconds_to_hours(mean(&durations)));

            all_durations.extend(durations);
            release_count += 1;
        }

        Ok(CycleTimeResult {
            cycle_time_hours: seconds_to_hours(mean(&all_durations)),
            release_count,
        })
    }
}
