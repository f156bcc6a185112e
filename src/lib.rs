//! Cycletime - git release cycle-time analyzer
//!
//! Cycletime measures the mean elapsed time between when commits are
//! authored and when they first land in a tagged release, aggregated
//! over all releases inside a date window.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod git;
pub mod report;
pub mod tags;

#[cfg(test)]
pub mod testutil;

// Re-export commonly used types
pub use cli::{render_summary, ConsoleReport};
pub use git::{GitCli, GitGateway, SortField};
pub use report::{CycleTimeAnalyzer, CycleTimeResult, ReleaseWindow, ReportSink};
pub use tags::{parse_instant, parse_tag_line, Release, ReleasePair, TagRecord};
