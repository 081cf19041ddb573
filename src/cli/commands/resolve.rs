//! Resolve command implementation.

use anyhow::Result;
use fixdesk_lib::IssueStore;

use crate::cli::ResolveArgs;
use crate::format;

/// Execute the resolve command.
///
/// # Errors
///
/// Returns an error if the ID does not resolve to exactly one issue.
pub fn execute(store: &mut IssueStore, args: &ResolveArgs, json: bool) -> Result<()> {
    let id = store.resolve_id(&args.issue)?;
    let issue = store.resolve_issue(&id)?;

    if json {
        format::print_json(&issue)?;
    } else {
        println!("Resolved {}: {}", issue.id, issue.title);
    }

    Ok(())
}
