//! Output formatting for `fixdesk`.
//!
//! Supports both human-readable text output and machine-parseable JSON.
//! With `--json`, commands send clean JSON to stdout and diagnostics to
//! stderr.
//!
//! # JSON Output Types
//!
//! - [`IssueWithMeta`] - Issue with suggestion/vote counts (list/search)
//! - [`FilterSnapshot`] - Current view criteria (filter show)
//! - [`SuggestionReceipt`] - Added suggestion confirmation (suggest)
//! - [`VoteReceipt`] - Recorded vote confirmation (vote)

mod output;
mod text;

pub use output::{FilterSnapshot, IssueWithMeta, SuggestionReceipt, VoteReceipt, print_json};
pub use text::{
    format_issue_line, format_issue_table, format_status_icon, format_suggestion_line,
    format_type_badge, format_votes, terminal_width, truncate_to_width,
};
