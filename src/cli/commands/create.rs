//! Create command implementation.
//!
//! Required-field checks happen here at the form boundary; the store
//! only enforces the duplicate rule.

use anyhow::Result;
use fixdesk_lib::{FixdeskError, IssueStore, NewIssue};

use crate::cli::CreateArgs;
use crate::config::Config;
use crate::format;
use crate::validation::{IssueFormValidator, split_keywords};

/// Execute the create command.
///
/// # Errors
///
/// Returns an error if a required field is missing or the store
/// rejects the issue as a duplicate.
pub fn execute(
    store: &mut IssueStore,
    args: &CreateArgs,
    config: &Config,
    json: bool,
) -> Result<()> {
    // Resolve reporter: flag, then env/config default
    let raised_by = args
        .raised_by
        .clone()
        .or_else(|| config.reporter.clone())
        .unwrap_or_default();
    let keywords = split_keywords(&args.keywords);

    IssueFormValidator::validate(&args.title, &raised_by, &keywords)
        .map_err(FixdeskError::from_validation_errors)?;

    let issue_type = match &args.type_ {
        Some(value) => value.parse()?,
        None => config.default_type,
    };

    let issue = store.create_issue(NewIssue {
        title: args.title.clone(),
        issue_type,
        raised_by,
        keywords,
        description: args.description.clone(),
        attachment: args.attachment.clone(),
    })?;

    if json {
        format::print_json(&issue)?;
    } else {
        println!("Created {}: {}", issue.id, issue.title);
    }

    Ok(())
}
