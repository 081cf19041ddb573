//! Filter command implementation.
//!
//! Session-sticky view criteria. Status, type, and search term combine
//! with AND; each subcommand adjusts one of them and then reports the
//! resulting view, so the effect of a change is immediately visible.

use anyhow::Result;
use fixdesk_lib::IssueStore;

use crate::cli::{FilterCommand, FilterSubcommand};
use crate::format::{self, FilterSnapshot};

/// Execute the filter command.
///
/// # Errors
///
/// Returns an error if a criterion value does not parse.
pub fn execute(store: &mut IssueStore, args: &FilterCommand, json: bool) -> Result<()> {
    match &args.command {
        Some(FilterSubcommand::Status { value }) => store.set_status_filter(value.parse()?),
        Some(FilterSubcommand::Type { value }) => store.set_type_filter(value.parse()?),
        Some(FilterSubcommand::Search { term }) => store.set_search_term(term.join(" ")),
        Some(FilterSubcommand::Clear) => store.clear_filters(),
        Some(FilterSubcommand::Show) | None => {}
    }

    let filters = store.filters();
    if json {
        format::print_json(&FilterSnapshot::from_filters(filters))?;
    } else {
        println!("Status: {}", filters.status);
        println!("Type:   {}", filters.issue_type);
        if filters.search.is_empty() {
            println!("Search: (none)");
        } else {
            println!("Search: {}", filters.search);
        }
        println!(
            "{} of {} issue(s) match",
            store.filtered_issues().len(),
            store.len()
        );
    }

    Ok(())
}
