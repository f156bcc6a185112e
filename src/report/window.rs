//! Analysis window
//!
//! The caller-supplied `[start, end]` interval that decides which release
//! pairs count toward the aggregate.

use chrono::{DateTime, Utc};

use crate::tags::ReleasePair;

/// Closed date interval admitting release pairs by their later endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseWindow {
    /// Inclusive lower bound.
    pub start: DateTime<Utc>,
    /// Inclusive upper bound.
    pub end: DateTime<Utc>,
}

impl ReleaseWindow {
    /// Create a window over `[start, end]`.
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Whether a release pair counts toward the aggregate.
    ///
    /// Only the lower bound is checked here: the release selector already
    /// excluded every tag dated after `end`, so no pair can carry a later
    /// release beyond the window. The earlier endpoint is deliberately
    /// unconstrained — the first admitted pair may start before `start`.
    #[must_use]
    pub fn admits(&self, pair: &ReleasePair) -> bool {
        pair.later
            .as_ref()
            .is_some_and(|later| later.timestamp >= self.start)
    }
}
