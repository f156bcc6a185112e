//! Console rendering for cycle-time reports
//!
//! Streams one line per admitted release pair as the analyzer measures it,
//! then renders the overall summary. Result lines go to stdout so they can
//! be piped; nothing else is written there.

use chrono::{DateTime, Utc};
use colored::Colorize;

use crate::report::{CycleTimeResult, ReleaseWindow, ReportSink};
use crate::tags::Release;

/// `ReportSink` that prints each pair's mean cycle time as it is computed.
#[derive(Debug, Default)]
pub struct ConsoleReport;

impl ConsoleReport {
    /// Create a console report sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportSink for ConsoleReport {
    fn pair_done(&mut self, earlier: &Release, later: &Release, mean_hours: f64) {
        println!(
            "{} {}",
            format!("{}..{}", earlier.name, later.name).bold(),
            format!("mean cycle time {}", format_hours(mean_hours)).dimmed()
        );
    }
}

/// Print the final summary line for a completed analysis.
pub fn render_summary(window: ReleaseWindow, result: &CycleTimeResult) {
    println!(
        "{} {}: {} releases, mean cycle time {} ({})",
        "Period".bold().cyan(),
        format!("{}..{}", format_day(window.start), format_day(window.end)).cyan(),
        result.release_count,
        format_hours(result.cycle_time_hours),
        format_days(result.cycle_time_hours),
    );
}

fn format_day(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d").to_string()
}

/// Format a mean in whole hours, or "n/a" when there was no data.
#[allow(clippy::cast_possible_truncation)]
fn format_hours(hours: f64) -> String {
    if hours.is_nan() {
        "n/a".to_string()
    } else {
        format!("{} h", hours.round() as i64)
    }
}

/// Format a mean in whole days, or "n/a" when there was no data.
#[allow(clippy::cast_possible_truncation)]
fn format_days(hours: f64) -> String {
    if hours.is_nan() {
        "n/a".to_string()
    } else {
        format!("{} d", (hours / 24.0).round() as i64)
    }
}
