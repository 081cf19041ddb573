//! Reopen command implementation.
//!
//! Reopening demands evidence: the attachment reference is checked at
//! the boundary, and the store appends it to the issue's history.

use anyhow::Result;
use fixdesk_lib::{FixdeskError, IssueStore};

use crate::cli::ReopenArgs;
use crate::format;
use crate::validation::AttachmentValidator;

/// Execute the reopen command.
///
/// # Errors
///
/// Returns an error if the attachment reference is blank or the ID
/// does not resolve to exactly one issue.
pub fn execute(store: &mut IssueStore, args: &ReopenArgs, json: bool) -> Result<()> {
    AttachmentValidator::validate(&args.attachment)
        .map_err(|e| FixdeskError::validation(e.field, e.message))?;

    let id = store.resolve_id(&args.issue)?;
    let issue = store.reopen_issue(&id, &args.attachment)?;

    if json {
        format::print_json(&issue)?;
    } else {
        println!(
            "Reopened {}: {} (attachment: {})",
            issue.id, issue.title, args.attachment
        );
    }

    Ok(())
}
