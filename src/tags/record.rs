//! Tag record parsing
//!
//! Parses one line of raw `git tag --format='%(refname:short) %(...date:iso-strict)'`
//! output into a typed record. Also provides the shared date-string parser
//! used for CLI arguments and commit timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// A single tag parsed from the raw tag listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRecord {
    /// Tag name (`refname:short`; contains no embedded whitespace).
    pub name: String,
    /// Tag timestamp. `None` when the date portion failed to parse;
    /// such a record never falls inside any analysis window.
    pub timestamp: Option<DateTime<Utc>>,
}

/// Parse a date string into a UTC instant.
///
/// Accepts RFC 3339 (what git emits for `iso-strict` dates and `%cI`),
/// a naive `YYYY-MM-DDTHH:MM:SS` datetime (interpreted as UTC), or a plain
/// `YYYY-MM-DD` date (midnight UTC). Returns `None` for anything else.
#[must_use]
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

/// Parse one line of tag-listing output into a `TagRecord`.
///
/// Returns `None` for blank lines. The tag name is the text before the first
/// whitespace; the remainder is parsed as the tag's date. A line whose date
/// portion is missing or unparseable still yields a record, but with
/// `timestamp: None` so it can never match a window.
#[must_use]
pub fn parse_tag_line(line: &str) -> Option<TagRecord> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (name, rest) = line
        .split_once(char::is_whitespace)
        .unwrap_or((line, ""));

    Some(TagRecord {
        name: name.to_string(),
        timestamp: parse_instant(rest),
    })
}
