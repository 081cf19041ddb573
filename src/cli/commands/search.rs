//! Search command implementation.
//!
//! Shorthand for setting the view's search term and listing what
//! matches. The term stays applied, exactly as `filter search` would
//! leave it.

use anyhow::Result;
use fixdesk_lib::IssueStore;

use crate::cli::SearchArgs;
use crate::format::{self, IssueWithMeta, format_issue_line};

/// Execute the search command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(store: &mut IssueStore, args: &SearchArgs, json: bool) -> Result<()> {
    store.set_search_term(args.term.join(" "));

    let view = store.filtered_issues();
    if json {
        let payload: Vec<IssueWithMeta> =
            view.iter().copied().map(IssueWithMeta::from_issue).collect();
        format::print_json(&payload)?;
    } else if view.is_empty() {
        println!("No issues match.");
    } else {
        for issue in &view {
            println!("{}", format_issue_line(issue));
        }
        println!("\n{} issue(s)", view.len());
    }

    Ok(())
}
