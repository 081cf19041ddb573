//! The demo dataset seeded into new sessions.
//!
//! Seven issues covering every type and both statuses, with five voted
//! suggestions. Creation dates are staggered over the three weeks
//! before a fixed anchor date, which pins the content-seeded IDs:
//! scripts and tests can address issues like `fx-1pl` in any session.

use chrono::{DateTime, Duration, Utc};

use crate::model::{Issue, IssueType, Status, Suggestion, VoteTally};

/// Days from the Unix epoch to the dataset's anchor, 2025-03-01 UTC.
const ANCHOR_DAYS: i64 = 20_148;

type SuggestionSeed = (i64, &'static str, u32, u32);

#[allow(clippy::type_complexity)]
const SEEDS: [(
    i64,
    &str,
    IssueType,
    &str,
    &[&str],
    &str,
    Status,
    Option<SuggestionSeed>,
); 7] = [
    (
        21,
        "Cannot connect to API endpoint",
        IssueType::Backend,
        "John Doe",
        &["API", "connection", "error"],
        "When trying to connect to the /users endpoint, I receive a 500 error.",
        Status::Pending,
        Some((
            1,
            "Check if the server is running and the endpoint is correctly implemented",
            12,
            2,
        )),
    ),
    (
        17,
        "Button styling is inconsistent across pages",
        IssueType::Frontend,
        "Jane Smith",
        &["UI", "buttons", "styling"],
        "The primary button has different styling on the dashboard vs the profile page",
        Status::Resolved,
        Some((
            2,
            "Create a shared button component that can be used across all pages",
            8,
            1,
        )),
    ),
    (
        14,
        "Login page is not mobile responsive",
        IssueType::Frontend,
        "Mike Johnson",
        &["responsive", "mobile", "login"],
        "The login form elements overlap on mobile screens smaller than 375px",
        Status::Pending,
        None,
    ),
    (
        12,
        "Tests failing for user authentication",
        IssueType::QA,
        "Sarah Williams",
        &["tests", "authentication", "failing"],
        "The user authentication tests are failing on the CI pipeline",
        Status::Resolved,
        Some((3, "Update the test fixtures with the new auth schema", 5, 0)),
    ),
    (
        9,
        "Database migration script timeout",
        IssueType::Backend,
        "Alex Chen",
        &["database", "migration", "timeout"],
        "The database migration script times out when running on production",
        Status::Pending,
        Some((4, "Break the migration into smaller batches", 7, 1)),
    ),
    (
        5,
        "Documentation is outdated",
        IssueType::Common,
        "Emma Lee",
        &["documentation", "outdated"],
        "The API documentation does not match the current implementation",
        Status::Pending,
        None,
    ),
    (
        2,
        "Performance issue on dashboard loading",
        IssueType::Frontend,
        "Tom Wilson",
        &["performance", "dashboard", "loading"],
        "The dashboard takes more than 5 seconds to load on slower connections",
        Status::Pending,
        Some((5, "Implement lazy loading for dashboard widgets", 10, 2)),
    ),
];

/// Build the demo issues in their canonical order.
///
/// IDs are generated the same way live creation generates them, from
/// fixed timestamps, so a seeded session always starts with the same
/// seven IDs.
#[must_use]
pub fn sample_issues() -> Vec<Issue> {
    let anchor: DateTime<Utc> = DateTime::UNIX_EPOCH + Duration::days(ANCHOR_DAYS);
    let mut issues: Vec<Issue> = Vec::with_capacity(SEEDS.len());

    for (days_ago, title, issue_type, raised_by, keywords, description, status, suggestion) in
        SEEDS
    {
        let created_at = anchor - Duration::days(days_ago);
        let id = crate::util::generate_id(
            "fx",
            title,
            raised_by,
            issue_type.as_str(),
            created_at,
            issues.len(),
            |candidate| issues.iter().any(|issue| issue.id == candidate),
        );

        let suggestions = match suggestion {
            Some((suggestion_id, text, helpful, not_helpful)) => vec![Suggestion {
                id: suggestion_id,
                text: text.to_string(),
                votes: VoteTally {
                    helpful,
                    not_helpful,
                },
            }],
            None => Vec::new(),
        };

        issues.push(Issue {
            id,
            title: title.to_string(),
            issue_type,
            raised_by: raised_by.to_string(),
            keywords: keywords.iter().map(ToString::to_string).collect(),
            description: Some(description.to_string()),
            attachments: Vec::new(),
            status,
            created_at,
            suggestions,
        });
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::IssueStore;

    #[test]
    fn sample_has_seven_issues_in_canonical_order() {
        let issues = sample_issues();
        assert_eq!(issues.len(), 7);
        assert_eq!(issues[0].title, "Cannot connect to API endpoint");
        assert_eq!(issues[6].title, "Performance issue on dashboard loading");
    }

    #[test]
    fn sample_ids_are_stable_across_sessions() {
        let ids: Vec<String> = sample_issues()
            .iter()
            .map(|issue| issue.id.clone())
            .collect();
        assert_eq!(
            ids,
            ["fx-2je", "fx-2rp", "fx-1pl", "fx-3bw", "fx-24e", "fx-2ad", "fx-2oe"]
        );
    }

    #[test]
    fn sample_statuses_and_votes_match_the_dataset() {
        let issues = sample_issues();
        let resolved: Vec<&str> = issues
            .iter()
            .filter(|issue| issue.status.is_resolved())
            .map(|issue| issue.title.as_str())
            .collect();
        assert_eq!(
            resolved,
            vec![
                "Button styling is inconsistent across pages",
                "Tests failing for user authentication"
            ]
        );

        let first = &issues[0].suggestions[0];
        assert_eq!((first.votes.helpful, first.votes.not_helpful), (12, 2));
    }

    #[test]
    fn seeded_store_continues_suggestion_ids_after_the_dataset() {
        let mut store = IssueStore::with_sample_data();
        let issue_id = store.issues()[2].id.clone();
        let suggestion = store
            .add_suggestion(&issue_id, "Use a responsive grid")
            .unwrap();
        assert_eq!(suggestion.id, 6);
    }

    #[test]
    fn searching_login_finds_exactly_the_responsive_page_issue() {
        let mut store = IssueStore::with_sample_data();
        store.set_search_term("login");
        let view = store.filtered_issues();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].title, "Login page is not mobile responsive");
    }

    #[test]
    fn voting_on_the_first_sample_suggestion_moves_one_counter() {
        let mut store = IssueStore::with_sample_data();
        let issue_id = store.issues()[0].id.clone();
        let votes = store.vote_suggestion(&issue_id, 1, true).unwrap();
        assert_eq!((votes.helpful, votes.not_helpful), (13, 2));

        let mut store = IssueStore::with_sample_data();
        let issue_id = store.issues()[0].id.clone();
        let votes = store.vote_suggestion(&issue_id, 1, false).unwrap();
        assert_eq!((votes.helpful, votes.not_helpful), (12, 3));
    }
}
