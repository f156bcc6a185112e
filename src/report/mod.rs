//! Cycle-time computation
//!
//! This module holds the windowing, extraction, and aggregation stages
//! of the pipeline and the analyzer that runs them end to end.

pub mod analyzer;
pub mod durations;
pub mod stats;
pub mod window;

pub use analyzer::{CycleTimeAnalyzer, CycleTimeResult, ReportSink};
pub use durations::{durations_for_pair, newly_added_commits};
pub use stats::{mean, seconds_to_hours};
pub use window::ReleaseWindow;
