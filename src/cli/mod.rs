//! CLI output formatting
//!
//! Provides human-readable terminal display for analysis results:
//! streamed per-pair lines and the final summary, with colored output.

pub mod display;

pub use display::render_summary;
pub use display::ConsoleReport;
