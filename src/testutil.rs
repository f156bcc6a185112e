//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use std::collections::HashMap;

use anyhow::{bail, Result};
use async_trait::async_trait;

use crate::git::{GitGateway, SortField};
use crate::report::ReportSink;
use crate::tags::Release;

/// In-memory `GitGateway` serving frozen text fixtures.
///
/// Queries with no registered fixture fail, which doubles as the way to
/// simulate a collaborator failure mid-pipeline.
#[derive(Debug, Default)]
pub struct FakeGit {
    tags: String,
    cherries: HashMap<(String, String), String>,
    timestamps: HashMap<String, String>,
}

impl FakeGit {
    /// Create a fake repository with the given raw tag listing.
    #[must_use]
    pub fn new(tags: &str) -> Self {
        Self {
            tags: tags.to_string(),
            ..Self::default()
        }
    }

    /// Register the cherry output for an (upstream, head) ref pair.
    #[must_use]
    pub fn with_cherry(mut self, upstream: &str, head: &str, output: &str) -> Self {
        self.cherries
            .insert((upstream.to_string(), head.to_string()), output.to_string());
        self
    }

    /// Register a commit's timestamp line.
    #[must_use]
    pub fn with_timestamp(mut self, commit: &str, timestamp: &str) -> Self {
        self.timestamps
            .insert(commit.to_string(), timestamp.to_string());
        self
    }
}

#[async_trait]
impl GitGateway for FakeGit {
    async fn list_tags(&self, _sort: SortField) -> Result<String> {
        Ok(self.tags.clone())
    }

    async fn cherry(&self, upstream: &str, head: &str) -> Result<String> {
        match self
            .cherries
            .get(&(upstream.to_string(), head.to_string()))
        {
            Some(output) => Ok(output.clone()),
            None => bail!("no cherry fixture for {upstream}..{head}"),
        }
    }

    async fn commit_timestamp(&self, commit: &str) -> Result<String> {
        match self.timestamps.get(commit) {
            Some(timestamp) => Ok(format!("{timestamp}\n")),
            None => bail!("no timestamp fixture for commit {commit}"),
        }
    }
}

/// `ReportSink` recording every streamed pair for assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// (earlier name, later name, mean hours) per streamed pair, in order.
    pub pairs: Vec<(String, String, f64)>,
}

impl ReportSink for RecordingSink {
    fn pair_done(&mut self, earlier: &Release, later: &Release, mean_hours: f64) {
        self.pairs
            .push((earlier.name.clone(), later.name.clone(), mean_hours));
    }
}
