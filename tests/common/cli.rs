//! Shared helpers for `fxd` end-to-end tests.
//!
//! Every invocation runs in its own scratch directory with the
//! `FIXDESK_*` environment scrubbed, so tests cannot see each other's
//! config files or the developer's own settings.

use std::path::PathBuf;
use std::process::{ExitStatus, Output};

use assert_cmd::Command;
use tempfile::TempDir;

/// Well-known IDs from the demo dataset. Sample issues are stamped
/// from a fixed anchor date, so their content-seeded IDs are the same
/// in every run.
pub mod sample {
    /// "Cannot connect to API endpoint" (Backend, Pending, s1 at +12/-2).
    pub const API_ENDPOINT: &str = "fx-2je";
    /// "Button styling is inconsistent across pages" (Frontend, Resolved).
    pub const BUTTON_STYLING: &str = "fx-2rp";
    /// "Login page is not mobile responsive" (Frontend, Pending, no suggestions).
    pub const LOGIN_PAGE: &str = "fx-1pl";
    /// "Tests failing for user authentication" (QA, Resolved).
    pub const AUTH_TESTS: &str = "fx-3bw";
    /// "Database migration script timeout" (Backend, Pending).
    pub const DB_MIGRATION: &str = "fx-24e";
    /// "Documentation is outdated" (Common, Pending, no suggestions).
    pub const DOCUMENTATION: &str = "fx-2ad";
    /// "Performance issue on dashboard loading" (Frontend, Pending).
    pub const DASHBOARD_PERF: &str = "fx-2oe";
}

/// Scratch working directory isolating one test from real config files.
pub struct FxdWorkspace {
    _dir: TempDir,
    pub root: PathBuf,
}

impl FxdWorkspace {
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp workspace");
        let root = dir.path().to_path_buf();
        Self { _dir: dir, root }
    }
}

impl Default for FxdWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Captured output of one `fxd` invocation.
pub struct RunResult {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for RunResult {
    fn from(output: Output) -> Self {
        Self {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Base command rooted in the workspace with a scrubbed environment.
pub fn fxd(workspace: &FxdWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("fxd").expect("fxd binary builds");
    cmd.current_dir(&workspace.root)
        .env_remove("FIXDESK_CONFIG")
        .env_remove("FIXDESK_REPORTER")
        .env_remove("FIXDESK_NO_SAMPLE")
        .env_remove("FIXDESK_DEFAULT_TYPE")
        .env_remove("FIXDESK_LOG");
    cmd
}

/// Run one one-shot command.
pub fn run_fxd<'a>(
    workspace: &FxdWorkspace,
    args: impl IntoIterator<Item = &'a str>,
    label: &str,
) -> RunResult {
    let output = fxd(workspace)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("{label}: failed to run fxd: {e}"));
    RunResult::from(output)
}

/// Run an interactive session fed from a script on stdin.
pub fn run_session(
    workspace: &FxdWorkspace,
    flags: &[&str],
    script: &str,
    label: &str,
) -> RunResult {
    let output = fxd(workspace)
        .args(flags)
        .write_stdin(script)
        .output()
        .unwrap_or_else(|e| panic!("{label}: failed to run fxd session: {e}"));
    RunResult::from(output)
}
