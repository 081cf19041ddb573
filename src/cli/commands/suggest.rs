//! Suggest command implementation.

use anyhow::Result;
use fixdesk_lib::{FixdeskError, IssueStore};

use crate::cli::SuggestArgs;
use crate::format::{self, SuggestionReceipt};

/// Execute the suggest command.
///
/// # Errors
///
/// Returns an error if the text is blank or the issue is not found.
pub fn execute(store: &mut IssueStore, args: &SuggestArgs, json: bool) -> Result<()> {
    let text = args.text.join(" ");
    if text.trim().is_empty() {
        return Err(FixdeskError::validation("suggestion", "cannot be empty").into());
    }

    let id = store.resolve_id(&args.issue)?;
    let suggestion = store.add_suggestion(&id, text)?;

    if json {
        format::print_json(&SuggestionReceipt {
            issue_id: id,
            suggestion,
        })?;
    } else {
        println!(
            "Added {} to {}: {}",
            suggestion.display_id(),
            id,
            suggestion.text
        );
    }

    Ok(())
}
