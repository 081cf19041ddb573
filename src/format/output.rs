//! JSON output payloads.
//!
//! Commands that mutate the store echo a receipt; read commands wrap
//! issues with derived counts. Everything here serializes camelCase to
//! match the issue wire format.

use fixdesk_lib::{Issue, Suggestion, ViewFilters, VoteTally};
use serde::{Deserialize, Serialize};

/// Pretty-print a payload as JSON on stdout.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn print_json<T: Serialize>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Issue with derived counts for list/search views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueWithMeta {
    #[serde(flatten)]
    pub issue: Issue,
    pub suggestion_count: usize,
    pub vote_total: u32,
}

impl IssueWithMeta {
    #[must_use]
    pub fn from_issue(issue: &Issue) -> Self {
        Self {
            issue: issue.clone(),
            suggestion_count: issue.suggestions.len(),
            vote_total: issue
                .suggestions
                .iter()
                .map(|suggestion| suggestion.votes.total())
                .sum(),
        }
    }
}

/// Current view criteria for the filter view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSnapshot {
    pub status: String,
    #[serde(rename = "type")]
    pub issue_type: String,
    pub search: String,
}

impl FilterSnapshot {
    #[must_use]
    pub fn from_filters(filters: &ViewFilters) -> Self {
        Self {
            status: filters.status.to_string(),
            issue_type: filters.issue_type.to_string(),
            search: filters.search.clone(),
        }
    }
}

/// Confirmation payload for a newly added suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionReceipt {
    pub issue_id: String,
    pub suggestion: Suggestion,
}

/// Confirmation payload for a recorded vote.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteReceipt {
    pub issue_id: String,
    pub suggestion_id: i64,
    pub votes: VoteTally,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixdesk_lib::{IssueType, Status, StatusFilter, TypeFilter};

    #[test]
    fn issue_with_meta_flattens_and_counts() {
        let mut issue = Issue {
            id: "fx-meta1".to_string(),
            title: "Meta".to_string(),
            raised_by: "Ana".to_string(),
            keywords: vec!["meta".to_string()],
            ..Issue::default()
        };
        issue.suggestions.push(Suggestion {
            id: 1,
            text: "First".to_string(),
            votes: VoteTally {
                helpful: 3,
                not_helpful: 1,
            },
        });

        let value = serde_json::to_value(IssueWithMeta::from_issue(&issue)).unwrap();
        assert_eq!(value["id"], "fx-meta1");
        assert_eq!(value["suggestionCount"], 1);
        assert_eq!(value["voteTotal"], 4);
    }

    #[test]
    fn filter_snapshot_uses_display_names() {
        let filters = ViewFilters {
            status: StatusFilter::All,
            issue_type: TypeFilter::Only(IssueType::QA),
            search: "login".to_string(),
        };
        let snapshot = FilterSnapshot::from_filters(&filters);
        assert_eq!(snapshot.status, "All");
        assert_eq!(snapshot.issue_type, "QA");
        assert_eq!(snapshot.search, "login");
    }

    #[test]
    fn filter_snapshot_wire_format() {
        let filters = ViewFilters {
            status: StatusFilter::Only(Status::Pending),
            issue_type: TypeFilter::Only(IssueType::Frontend),
            search: "login".to_string(),
        };
        insta::assert_json_snapshot!(FilterSnapshot::from_filters(&filters), @r###"
        {
          "status": "Pending",
          "type": "Frontend",
          "search": "login"
        }
        "###);
    }

    #[test]
    fn vote_receipt_wire_format() {
        let receipt = VoteReceipt {
            issue_id: "fx-2je".to_string(),
            suggestion_id: 1,
            votes: VoteTally {
                helpful: 13,
                not_helpful: 2,
            },
        };
        insta::assert_json_snapshot!(receipt, @r###"
        {
          "issueId": "fx-2je",
          "suggestionId": 1,
          "votes": {
            "helpful": 13,
            "notHelpful": 2
          }
        }
        "###);
    }
}
