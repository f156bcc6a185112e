//! Release selection and pairing
//!
//! Narrows the raw tag listing down to the tags that count as releases,
//! then slides a window of two over the chronological sequence to form
//! consecutive release pairs.

use chrono::{DateTime, Utc};
use regex::Regex;

use super::record::parse_tag_line;

/// A tag admitted as a release: its name matched the release pattern and
/// its timestamp parsed and lies at or before the window end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    /// Tag name.
    pub name: String,
    /// Tag timestamp in UTC.
    pub timestamp: DateTime<Utc>,
}

/// Two consecutive releases in chronological order.
///
/// The last pair in a sequence has `later: None`; the window filter
/// always discards it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePair {
    /// The earlier release of the pair.
    pub earlier: Release,
    /// The next release, or `None` for the final element of the sequence.
    pub later: Option<Release>,
}

/// Select release tags from raw tag-listing output.
///
/// Each line is parsed via [`parse_tag_line`]; blank lines and records
/// without a parseable timestamp are dropped, as are records dated strictly
/// after `end` and records whose name does not match `pattern`. Input order
/// is preserved — the listing is already sorted chronologically ascending by
/// git, and this function does not re-sort or re-validate that ordering.
#[must_use]
pub fn select_releases(raw_tags: &str, pattern: &Regex, end: DateTime<Utc>) -> Vec<Release> {
    raw_tags
        .lines()
        .filter_map(parse_tag_line)
        .filter_map(|record| {
            let timestamp = record.timestamp?;
            (timestamp <= end && pattern.is_match(&record.name)).then(|| Release {
                name: record.name,
                timestamp,
            })
        })
        .collect()
}

/// Pair consecutive releases: element *i* with element *i+1*.
///
/// Emits exactly one pair per input release; the final pair has
/// `later: None`.
#[must_use]
pub fn pair_releases(releases: Vec<Release>) -> Vec<ReleasePair> {
    let mut pairs = Vec::with_capacity(releases.len());
    let mut iter = releases.into_iter().peekable();
    while let Some(earlier) = iter.next() {
        pairs.push(ReleasePair {
            later: iter.peek().cloned(),
            earlier,
        });
    }
    pairs
}
