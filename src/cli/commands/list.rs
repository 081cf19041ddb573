//! List command implementation.
//!
//! Primary read surface: applies any criteria given on the command
//! line to the store, then renders the derived view. Applied criteria
//! persist for the rest of the session until changed or cleared.

use anyhow::Result;
use fixdesk_lib::IssueStore;

use crate::cli::ListArgs;
use crate::format::{self, IssueWithMeta};

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if a criterion value does not parse.
pub fn execute(store: &mut IssueStore, args: &ListArgs, json: bool) -> Result<()> {
    apply_criteria(store, args)?;

    let view = store.filtered_issues();
    if json {
        let payload: Vec<IssueWithMeta> =
            view.iter().copied().map(IssueWithMeta::from_issue).collect();
        format::print_json(&payload)?;
    } else if view.is_empty() {
        println!("No issues found.");
    } else {
        print!(
            "{}",
            format::format_issue_table(&view, format::terminal_width())
        );
        println!("\n{} issue(s)", view.len());
    }

    Ok(())
}

/// Apply command-line criteria to the store's view.
fn apply_criteria(store: &mut IssueStore, args: &ListArgs) -> Result<()> {
    if let Some(status) = &args.status {
        store.set_status_filter(status.parse()?);
    }
    if let Some(issue_type) = &args.type_ {
        store.set_type_filter(issue_type.parse()?);
    }
    if let Some(term) = &args.search {
        store.set_search_term(term.clone());
    }
    Ok(())
}
