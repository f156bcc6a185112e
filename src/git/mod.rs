//! Git collaborators
//!
//! Command builders and the gateway seam for the external git queries
//! the analyzer depends on: tag listing, cherry diffs, and commit
//! timestamps.

pub mod cli;
pub mod gateway;

pub use gateway::{GitCli, GitGateway, SortField};
