//! Vote command implementation.

use anyhow::Result;
use fixdesk_lib::{FixdeskError, IssueStore};

use crate::cli::VoteArgs;
use crate::format::{self, VoteReceipt, format_votes};

/// Execute the vote command.
///
/// # Errors
///
/// Returns an error if the issue or suggestion cannot be found, or the
/// suggestion reference does not parse.
pub fn execute(store: &mut IssueStore, args: &VoteArgs, json: bool) -> Result<()> {
    let id = store.resolve_id(&args.issue)?;
    let suggestion_id = parse_suggestion_ref(&args.suggestion)?;
    let votes = store.vote_suggestion(&id, suggestion_id, args.verdict.is_helpful())?;

    if json {
        format::print_json(&VoteReceipt {
            issue_id: id,
            suggestion_id,
            votes,
        })?;
    } else {
        println!("s{} on {}: {}", suggestion_id, id, format_votes(votes));
    }

    Ok(())
}

/// Parse a suggestion reference: `s3` or bare `3`.
fn parse_suggestion_ref(input: &str) -> Result<i64, FixdeskError> {
    let digits = input.strip_prefix(['s', 'S']).unwrap_or(input);
    digits.parse().map_err(|_| {
        FixdeskError::validation(
            "suggestion",
            format!("'{input}' is not a suggestion reference"),
        )
    })
}
