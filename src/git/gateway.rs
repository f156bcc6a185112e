//! Git gateway seam
//!
//! The analyzer only ever needs three line-oriented queries against a
//! repository. `GitGateway` abstracts them so the pipeline can run against
//! real git subprocesses in production and frozen text fixtures in tests.

use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

use super::cli::{
    build_cherry_command, build_commit_timestamp_command, build_tag_list_command, run_for_output,
};

/// Which tag date field drives ordering and windowing.
///
/// Annotated (tagger) dates are the default; lightweight tags carry no
/// tagger date, so `--lightweight` switches to creation dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// The tag object's tagger date (annotated tags).
    TaggerDate,
    /// The tagged commit's creation date (works for lightweight tags).
    CreatorDate,
}

impl SortField {
    /// The git ref-format field name for this sort.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::TaggerDate => "taggerdate",
            Self::CreatorDate => "creatordate",
        }
    }

    /// Select the field from the `--lightweight` CLI flag.
    #[must_use]
    pub const fn for_lightweight(lightweight: bool) -> Self {
        if lightweight {
            Self::CreatorDate
        } else {
            Self::TaggerDate
        }
    }
}

/// The three repository queries the cycle-time pipeline consumes.
///
/// Every method returns raw line-oriented text exactly as the underlying
/// source produced it; parsing happens in the pipeline. Any failure is
/// fatal for the whole invocation.
#[async_trait]
pub trait GitGateway {
    /// List all tags, one `"<name> <iso-date>"` line per tag, sorted
    /// chronologically ascending by `sort`.
    async fn list_tags(&self, sort: SortField) -> Result<String>;

    /// List commits unique to `head` relative to `upstream`, one
    /// `"<+|-> <commitId>"` line per commit.
    async fn cherry(&self, upstream: &str, head: &str) -> Result<String>;

    /// The committer timestamp of a single commit as one ISO date line.
    async fn commit_timestamp(&self, commit: &str) -> Result<String>;
}

/// `GitGateway` backed by real `git` subprocess invocations.
#[derive(Debug, Clone)]
pub struct GitCli {
    repository: PathBuf,
}

impl GitCli {
    /// Create a gateway for the repository at the given path.
    pub fn new(repository: impl Into<PathBuf>) -> Self {
        Self {
            repository: repository.into(),
        }
    }
}

#[async_trait]
impl GitGateway for GitCli {
    async fn list_tags(&self, sort: SortField) -> Result<String> {
        run_for_output(build_tag_list_command(&self.repository, sort), "list tags").await
    }

    async fn cherry(&self, upstream: &str, head: &str) -> Result<String> {
        run_for_output(
            build_cherry_command(&self.repository, upstream, head),
            "diff commits",
        )
        .await
    }

    async fn commit_timestamp(&self, commit: &str) -> Result<String> {
        run_for_output(
            build_commit_timestamp_command(&self.repository, commit),
            "read commit timestamp",
        )
        .await
    }
}
