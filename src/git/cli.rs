//! Git command builders
//!
//! Constructs `std::process::Command` for the three git queries the
//! analyzer needs, and provides `run_for_output` to spawn a command and
//! collect its stdout, failing on a non-zero exit.

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use tokio::process::Command as TokioCommand;

use super::gateway::SortField;

/// Build a `Command` listing all tags with their dates.
///
/// Uses `git -C <repository> tag --sort=<field>` so the output arrives
/// already sorted chronologically ascending, one `"<name> <iso-date>"`
/// line per tag. The date field matches the sort field.
#[must_use]
pub fn build_tag_list_command(repository: &Path, sort: SortField) -> Command {
    let field = sort.field_name();
    let mut cmd = Command::new("git");
    cmd.arg("-C").arg(repository);
    cmd.arg("tag");
    cmd.arg(format!("--sort={field}"));
    cmd.arg(format!("--format=%(refname:short) %({field}:iso-strict)"));
    cmd
}

/// Build a `Command` listing commits unique to `head` relative to `upstream`.
///
/// `git cherry` prefixes each commit line with `+` (new in head) or `-`
/// (an equivalent change already exists upstream).
#[must_use]
pub fn build_cherry_command(repository: &Path, upstream: &str, head: &str) -> Command {
    let mut cmd = Command::new("git");
    cmd.arg("-C").arg(repository);
    cmd.arg("cherry");
    cmd.arg(upstream).arg(head);
    cmd
}

/// Build a `Command` printing a single commit's committer timestamp
/// in strict ISO 8601 form.
#[must_use]
pub fn build_commit_timestamp_command(repository: &Path, commit: &str) -> Command {
    let mut cmd = Command::new("git");
    cmd.arg("-C").arg(repository);
    cmd.arg("show").arg("-s").arg("--format=%cI");
    cmd.arg(commit);
    cmd
}

/// Format an exit code for error messages, returning "unknown" if the
/// process was killed by signal.
fn format_exit_code(exit_code: Option<i32>) -> String {
    exit_code.map_or_else(|| "unknown".to_string(), |c| c.to_string())
}

/// Spawn a git command and return its captured stdout.
///
/// `what` names the operation for error messages. A spawn failure or a
/// non-zero exit is an error; git's stderr is folded into the message.
pub async fn run_for_output(cmd: Command, what: &str) -> Result<String> {
    let output = TokioCommand::from(cmd)
        .stdin(Stdio::null())
        .output()
        .await
        .with_context(|| format!("Failed to run git to {what}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "git {what} failed with exit code {}: {}",
            format_exit_code(output.status.code()),
            stderr.trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args_of(cmd: &Command) -> Vec<&str> {
        cmd.get_args().map(|a| a.to_str().unwrap()).collect()
    }

    #[test]
    fn test_tag_list_uses_git_binary() {
        let cmd = build_tag_list_command(&PathBuf::from("/repo"), SortField::TaggerDate);
        assert_eq!(cmd.get_program().to_str().unwrap(), "git");
    }

    #[test]
    fn test_tag_list_targets_repository_path() {
        let cmd = build_tag_list_command(&PathBuf::from("/repo"), SortField::TaggerDate);
        let args = args_of(&cmd);
        assert_eq!(args[0], "-C");
        assert_eq!(args[1], "/repo");
    }

    #[test]
    fn test_tag_list_sorts_by_tagger_date() {
        let cmd = build_tag_list_command(&PathBuf::from("/repo"), SortField::TaggerDate);
        let args = args_of(&cmd);
        assert!(
            args.contains(&"--sort=taggerdate"),
            "Expected taggerdate sort, got: {args:?}"
        );
        assert!(
            args.contains(&"--format=%(refname:short) %(taggerdate:iso-strict)"),
            "Expected taggerdate format, got: {args:?}"
        );
    }

    #[test]
    fn test_tag_list_sorts_by_creator_date_for_lightweight() {
        let cmd = build_tag_list_command(&PathBuf::from("/repo"), SortField::CreatorDate);
        let args = args_of(&cmd);
        assert!(
            args.contains(&"--sort=creatordate"),
            "Expected creatordate sort, got: {args:?}"
        );
    }

    #[test]
    fn test_cherry_passes_upstream_then_head() {
        let cmd = build_cherry_command(&PathBuf::from("/repo"), "v1.0", "v1.1");
        let args = args_of(&cmd);
        let cherry_pos = args.iter().position(|a| *a == "cherry").unwrap();
        assert_eq!(args[cherry_pos + 1], "v1.0");
        assert_eq!(args[cherry_pos + 2], "v1.1");
    }

    #[test]
    fn test_commit_timestamp_uses_strict_iso_format() {
        let cmd = build_commit_timestamp_command(&PathBuf::from("/repo"), "abc123");
        let args = args_of(&cmd);
        assert!(args.contains(&"show"));
        assert!(args.contains(&"-s"));
        assert!(args.contains(&"--format=%cI"));
        assert_eq!(*args.last().unwrap(), "abc123");
    }

    // --- run_for_output tests (exercise the subprocess path directly) ---

    #[tokio::test]
    async fn test_run_for_output_captures_stdout() {
        let mut cmd = Command::new("echo");
        cmd.arg("hello");
        let output = run_for_output(cmd, "echo").await.unwrap();
        assert_eq!(output, "hello\n");
    }

    #[tokio::test]
    async fn test_run_for_output_fails_on_nonzero_exit() {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg("echo broken >&2; exit 3");
        let err = run_for_output(cmd, "list tags").await.unwrap_err();
        let message = format!("{err}");
        assert!(message.contains("list tags"), "got: {message}");
        assert!(message.contains('3'), "got: {message}");
        assert!(message.contains("broken"), "got: {message}");
    }

    #[tokio::test]
    async fn test_run_for_output_fails_on_missing_binary() {
        let cmd = Command::new("definitely-not-a-real-binary-xyz");
        assert!(run_for_output(cmd, "list tags").await.is_err());
    }
}
