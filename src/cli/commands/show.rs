//! Show command implementation.

use anyhow::Result;
use fixdesk_lib::IssueStore;

use crate::cli::ShowArgs;
use crate::format::{self, format_issue_line, format_suggestion_line};

/// Execute the show command.
///
/// # Errors
///
/// Returns an error if the ID does not resolve to exactly one issue.
pub fn execute(store: &IssueStore, args: &ShowArgs, json: bool) -> Result<()> {
    let id = store.resolve_id(&args.issue)?;
    let issue = store.get_issue(&id)?;

    if json {
        format::print_json(issue)?;
        return Ok(());
    }

    println!("{}", format_issue_line(issue));
    println!("Raised by:  {}", issue.raised_by);
    println!("Status:     {}", issue.status);
    println!("Created:    {}", issue.created_at.format("%Y-%m-%d"));
    println!("Keywords:   {}", issue.keywords.join(", "));

    if let Some(description) = &issue.description {
        println!("\n{description}");
    }

    if !issue.attachments.is_empty() {
        println!("\nAttachments:");
        for attachment in &issue.attachments {
            println!("  - {attachment}");
        }
    }

    if !issue.suggestions.is_empty() {
        println!("\nSuggestions:");
        for suggestion in &issue.suggestions {
            println!("  {}", format_suggestion_line(suggestion));
        }
    }

    Ok(())
}
