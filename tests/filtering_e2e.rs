//! End-to-end tests for one-shot commands.
//!
//! Covers listing, the three view criteria, search, JSON output, and
//! configuration overrides. Every test spawns fresh processes, so these
//! also pin the transiency contract: nothing changed in one run is
//! visible in the next.

mod common;

use common::cli::{FxdWorkspace, fxd, run_fxd, sample};
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn list_renders_the_full_demo_table() {
    let workspace = FxdWorkspace::new();
    let result = run_fxd(&workspace, ["list"], "list");

    assert!(result.status.success(), "list failed: {}", result.stderr);
    assert!(result.stdout.contains("ID"));
    assert!(result.stdout.contains("STATUS"));
    assert!(result.stdout.contains("RAISED BY"));
    assert!(result.stdout.contains(sample::API_ENDPOINT));
    assert!(result.stdout.contains("Cannot connect to API endpoint"));
    assert!(result.stdout.contains("7 issue(s)"));
}

#[test]
fn list_applies_status_and_type_criteria_together() {
    let workspace = FxdWorkspace::new();
    let result = run_fxd(
        &workspace,
        ["list", "--status", "resolved", "--type", "frontend"],
        "filtered list",
    );

    assert!(result.status.success(), "list failed: {}", result.stderr);
    assert!(
        result
            .stdout
            .contains("Button styling is inconsistent across pages")
    );
    assert!(result.stdout.contains("1 issue(s)"));
    // Resolved, but QA: must not pass the type criterion.
    assert!(!result.stdout.contains("Tests failing for user authentication"));
}

#[test]
fn search_matches_titles_and_keywords() {
    let workspace = FxdWorkspace::new();
    let result = run_fxd(&workspace, ["search", "login"], "search");

    assert!(result.status.success(), "search failed: {}", result.stderr);
    assert!(result.stdout.contains("Login page is not mobile responsive"));
    assert!(result.stdout.contains("1 issue(s)"));
    assert!(!result.stdout.contains("Cannot connect to API endpoint"));
}

#[test]
fn multi_word_search_matches_as_one_phrase() {
    let workspace = FxdWorkspace::new();
    let result = run_fxd(&workspace, ["search", "API", "endpoint"], "phrase search");

    assert!(result.status.success(), "search failed: {}", result.stderr);
    assert!(result.stdout.contains("Cannot connect to API endpoint"));
    assert!(result.stdout.contains("1 issue(s)"));
}

#[test]
fn show_accepts_a_partial_id() {
    let workspace = FxdWorkspace::new();
    let result = run_fxd(&workspace, ["show", "1pl"], "show partial");

    assert!(result.status.success(), "show failed: {}", result.stderr);
    assert!(result.stdout.contains("Login page is not mobile responsive"));
    assert!(result.stdout.contains("Mike Johnson"));
    assert!(result.stdout.contains("responsive, mobile, login"));
}

#[test]
fn list_json_emits_the_record_format() {
    let workspace = FxdWorkspace::new();
    let result = run_fxd(&workspace, ["list", "--json"], "list json");

    assert!(result.status.success(), "list failed: {}", result.stderr);
    let parsed: Value = serde_json::from_str(&result.stdout).expect("stdout is valid JSON");
    let issues = parsed.as_array().expect("top level is an array");
    assert_eq!(issues.len(), 7);

    let first = &issues[0];
    assert_eq!(first["id"], sample::API_ENDPOINT);
    assert_eq!(first["title"], "Cannot connect to API endpoint");
    assert_eq!(first["type"], "Backend");
    assert_eq!(first["raisedBy"], "John Doe");
    assert_eq!(first["status"], "Pending");
    assert_eq!(first["suggestionCount"], 1);
    assert_eq!(first["voteTotal"], 14);
    assert_eq!(first["suggestions"][0]["votes"]["helpful"], 12);
    // Empty attachment lists are omitted from the record.
    assert!(first.get("attachments").is_none());
}

#[test]
fn vote_json_emits_a_receipt_with_the_new_tally() {
    let workspace = FxdWorkspace::new();
    let result = run_fxd(
        &workspace,
        ["vote", sample::API_ENDPOINT, "s1", "helpful", "--json"],
        "vote json",
    );

    assert!(result.status.success(), "vote failed: {}", result.stderr);
    let receipt: Value = serde_json::from_str(&result.stdout).expect("stdout is valid JSON");
    assert_eq!(receipt["issueId"], sample::API_ENDPOINT);
    assert_eq!(receipt["suggestionId"], 1);
    assert_eq!(receipt["votes"]["helpful"], 13);
    assert_eq!(receipt["votes"]["notHelpful"], 2);
}

#[test]
fn one_shot_runs_do_not_share_state() {
    let workspace = FxdWorkspace::new();

    let resolve = run_fxd(&workspace, ["resolve", sample::DOCUMENTATION], "resolve");
    assert!(resolve.status.success(), "resolve failed: {}", resolve.stderr);
    assert!(
        resolve
            .stdout
            .contains("Resolved fx-2ad: Documentation is outdated")
    );

    let list = run_fxd(&workspace, ["list", "--status", "resolved"], "list resolved");
    assert!(list.status.success(), "list failed: {}", list.stderr);
    assert!(list.stdout.contains("2 issue(s)"));
    assert!(!list.stdout.contains("Documentation is outdated"));
}

#[test]
fn config_file_can_disable_seeding() {
    let workspace = FxdWorkspace::new();
    std::fs::write(
        workspace.root.join("fixdesk.yaml"),
        "seed_sample_data: false\n",
    )
    .expect("write config file");

    let result = run_fxd(&workspace, ["list"], "list without samples");
    assert!(result.status.success(), "list failed: {}", result.stderr);
    assert!(result.stdout.contains("No issues found."));
}

#[test]
fn no_sample_env_skips_seeding() {
    let workspace = FxdWorkspace::new();
    fxd(&workspace)
        .env("FIXDESK_NO_SAMPLE", "1")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found."));
}

#[test]
fn reporter_env_fills_in_raised_by() {
    let workspace = FxdWorkspace::new();
    fxd(&workspace)
        .env("FIXDESK_REPORTER", "Robot Reporter")
        .args([
            "create",
            "Nightly sync job stalls",
            "--type",
            "backend",
            "--keywords",
            "sync,cron",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"raisedBy\": \"Robot Reporter\""));
}

#[test]
fn create_reports_every_missing_field() {
    let workspace = FxdWorkspace::new();
    let result = run_fxd(&workspace, ["create", "Broken search box"], "bare create");

    assert!(!result.status.success());
    assert!(result.stderr.contains("raised-by: cannot be empty"));
    assert!(
        result
            .stderr
            .contains("keywords: at least one keyword is required")
    );
}

#[test]
fn reopen_rejects_a_blank_attachment_reference() {
    let workspace = FxdWorkspace::new();
    let result = run_fxd(
        &workspace,
        ["reopen", sample::BUTTON_STYLING, "   "],
        "blank reopen",
    );

    assert!(!result.status.success());
    assert!(
        result
            .stderr
            .contains("reopening requires an attachment reference")
    );
}

#[test]
fn bare_filter_reports_the_default_view() {
    let workspace = FxdWorkspace::new();
    let result = run_fxd(&workspace, ["filter"], "filter");

    assert!(result.status.success(), "filter failed: {}", result.stderr);
    assert!(result.stdout.contains("Status: All"));
    assert!(result.stdout.contains("Type:   All"));
    assert!(result.stdout.contains("Search: (none)"));
    assert!(result.stdout.contains("7 of 7 issue(s) match"));
}

#[test]
fn invalid_status_value_is_rejected() {
    let workspace = FxdWorkspace::new();
    fxd(&workspace)
        .args(["list", "--status", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid status: bogus"));
}
