//! Tag parsing and release selection
//!
//! This module turns raw git tag-listing text into typed release
//! records, filters them against the release pattern, and pairs
//! consecutive releases.

pub mod record;
pub mod select;

pub use record::{parse_instant, parse_tag_line, TagRecord};
pub use select::{pair_releases, select_releases, Release, ReleasePair};
