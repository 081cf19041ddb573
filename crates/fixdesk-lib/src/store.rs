//! In-memory issue store.
//!
//! Owns the issue collection and the current view criteria. All state is
//! transient: it lives for the owning session and is gone on drop. Every
//! mutation goes through a named operation on [`IssueStore`].

use chrono::Utc;

use crate::error::{FixdeskError, Result};
use crate::model::{Issue, IssueType, Status, Suggestion, VoteTally};
use crate::query::{NewIssue, StatusFilter, TypeFilter, ViewFilters};

/// In-memory fixdesk issue store.
///
/// Issues are kept in insertion order and never removed. The derived
/// filtered view is recomputed from the full collection on every read;
/// at the scale this store targets (hundreds of issues) a full scan is
/// cheaper than cache invalidation.
pub struct IssueStore {
    issues: Vec<Issue>,
    filters: ViewFilters,
    next_suggestion_id: i64,
    prefix: String,
}

impl IssueStore {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            issues: Vec::new(),
            filters: ViewFilters::default(),
            next_suggestion_id: 1,
            prefix: "fx".to_string(),
        }
    }

    /// Create a store seeded with the demo dataset.
    #[must_use]
    pub fn with_sample_data() -> Self {
        let mut store = Self::new();
        store.issues = crate::sample::sample_issues();
        store.next_suggestion_id = store
            .issues
            .iter()
            .flat_map(|issue| issue.suggestions.iter())
            .map(|suggestion| suggestion.id)
            .max()
            .map_or(1, |max| max + 1);
        store
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Create a new issue.
    ///
    /// The store assigns the ID, stamps the creation time, and starts the
    /// issue as `Pending` with no suggestions. Required-field validation
    /// is the caller's responsibility; the store only rejects duplicates.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateIssue` if an issue with the same title
    /// (case-insensitive) and type already exists. The collection is left
    /// untouched on failure.
    pub fn create_issue(&mut self, new_issue: NewIssue) -> Result<Issue> {
        let NewIssue {
            title,
            issue_type,
            raised_by,
            keywords,
            description,
            attachment,
        } = new_issue;

        if self.is_duplicate(&title, issue_type) {
            return Err(FixdeskError::DuplicateIssue {
                title,
                issue_type: issue_type.as_str().to_string(),
            });
        }

        let now = Utc::now();
        let id = crate::util::generate_id(
            &self.prefix,
            &title,
            &raised_by,
            issue_type.as_str(),
            now,
            self.issues.len(),
            |candidate| self.issues.iter().any(|issue| issue.id == candidate),
        );

        let issue = Issue {
            id,
            title,
            issue_type,
            raised_by,
            keywords,
            description,
            attachments: attachment.into_iter().collect(),
            status: Status::Pending,
            created_at: now,
            suggestions: Vec::new(),
        };

        tracing::debug!("Created issue {}", issue.id);
        self.issues.push(issue.clone());
        Ok(issue)
    }

    /// Add a suggestion to an issue.
    ///
    /// The suggestion starts with zero votes on both counters. Duplicate
    /// suggestion text is allowed.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if the issue doesn't exist.
    pub fn add_suggestion(
        &mut self,
        issue_id: &str,
        text: impl Into<String>,
    ) -> Result<Suggestion> {
        let id = self.next_suggestion_id;
        let issue = self.find_mut(issue_id)?;

        let suggestion = Suggestion {
            id,
            text: text.into(),
            votes: VoteTally::default(),
        };
        issue.suggestions.push(suggestion.clone());
        self.next_suggestion_id += 1;

        tracing::debug!("Added suggestion s{} to {}", suggestion.id, issue_id);
        Ok(suggestion)
    }

    /// Record a vote on a suggestion, incrementing exactly one counter.
    ///
    /// There is no per-voter bookkeeping: the same caller may vote any
    /// number of times and every vote accumulates.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` or `SuggestionNotFound`.
    pub fn vote_suggestion(
        &mut self,
        issue_id: &str,
        suggestion_id: i64,
        helpful: bool,
    ) -> Result<VoteTally> {
        let issue = self.find_mut(issue_id)?;
        let Some(suggestion) = issue.suggestion_mut(suggestion_id) else {
            return Err(FixdeskError::SuggestionNotFound {
                issue_id: issue_id.to_string(),
                suggestion_id,
            });
        };
        suggestion.votes.record(helpful);
        Ok(suggestion.votes)
    }

    /// Mark an issue as resolved.
    ///
    /// Only the status changes; resolving an already-resolved issue is a
    /// no-op that still succeeds.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if the issue doesn't exist.
    pub fn resolve_issue(&mut self, issue_id: &str) -> Result<Issue> {
        let issue = self.find_mut(issue_id)?;
        issue.status = Status::Resolved;
        tracing::debug!("Resolved issue {}", issue_id);
        Ok(issue.clone())
    }

    /// Reopen an issue, attaching the supporting reference.
    ///
    /// Sets the status back to `Pending` and appends the attachment to
    /// the end of the list. Prior attachments are never touched.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the attachment is empty or whitespace,
    /// or `IssueNotFound` if the issue doesn't exist.
    pub fn reopen_issue(&mut self, issue_id: &str, attachment: &str) -> Result<Issue> {
        if attachment.trim().is_empty() {
            return Err(FixdeskError::validation("attachment", "cannot be empty"));
        }

        let issue = self.find_mut(issue_id)?;
        issue.status = Status::Pending;
        issue.attachments.push(attachment.to_string());
        tracing::debug!("Reopened issue {}", issue_id);
        Ok(issue.clone())
    }

    // ========================================================================
    // View Criteria
    // ========================================================================

    /// Set the status criterion.
    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.filters.status = filter;
    }

    /// Set the type criterion.
    pub fn set_type_filter(&mut self, filter: TypeFilter) {
        self.filters.issue_type = filter;
    }

    /// Set the search term. An empty string means no search constraint.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filters.search = term.into();
    }

    /// Reset all three criteria to their defaults.
    pub fn clear_filters(&mut self) {
        self.filters = ViewFilters::default();
    }

    /// The current view criteria.
    #[must_use]
    pub fn filters(&self) -> &ViewFilters {
        &self.filters
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// All issues in insertion order.
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// The derived view: issues passing all three criteria, in insertion
    /// order. Recomputed on every call.
    #[must_use]
    pub fn filtered_issues(&self) -> Vec<&Issue> {
        self.issues
            .iter()
            .filter(|issue| self.filters.matches(issue))
            .collect()
    }

    /// Get an issue by its full ID.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if the issue doesn't exist.
    pub fn get_issue(&self, id: &str) -> Result<&Issue> {
        self.issues
            .iter()
            .find(|issue| issue.id == id)
            .ok_or_else(|| FixdeskError::IssueNotFound { id: id.to_string() })
    }

    /// Check if an issue ID exists.
    #[must_use]
    pub fn id_exists(&self, id: &str) -> bool {
        self.issues.iter().any(|issue| issue.id == id)
    }

    /// Get the total number of issues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    // ========================================================================
    // ID Resolution
    // ========================================================================

    /// Resolve a partial ID to a full ID.
    ///
    /// Tries: exact match, prefix-normalized, substring match on the hash
    /// portion.
    ///
    /// # Errors
    ///
    /// Returns `InvalidId`, `IssueNotFound`, or `AmbiguousId`.
    pub fn resolve_id(&self, input: &str) -> Result<String> {
        let input = input.trim().to_lowercase();

        if input.is_empty() {
            return Err(FixdeskError::InvalidId { id: String::new() });
        }

        // Exact match
        if self.id_exists(&input) {
            return Ok(input);
        }

        // Prefix-normalized
        if !input.contains('-') {
            let with_prefix = format!("{}-{}", self.prefix, input);
            if self.id_exists(&with_prefix) {
                return Ok(with_prefix);
            }
        }

        // Substring match on hash portion
        let hash_pattern = input
            .rfind('-')
            .map_or(input.as_str(), |pos| &input[pos + 1..]);

        if !hash_pattern.is_empty() {
            let matches: Vec<String> = self
                .issues
                .iter()
                .filter(|issue| {
                    issue.id.rfind('-').is_some_and(|pos| {
                        let hash = &issue.id[pos + 1..];
                        hash.contains(hash_pattern)
                    })
                })
                .map(|issue| issue.id.clone())
                .collect();

            match matches.len() {
                0 => {}
                1 => return Ok(matches.into_iter().next().unwrap_or_default()),
                _ => {
                    return Err(FixdeskError::AmbiguousId {
                        partial: input,
                        matches,
                    });
                }
            }
        }

        Err(FixdeskError::IssueNotFound { id: input })
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    fn find_mut(&mut self, id: &str) -> Result<&mut Issue> {
        self.issues
            .iter_mut()
            .find(|issue| issue.id == id)
            .ok_or_else(|| FixdeskError::IssueNotFound { id: id.to_string() })
    }

    fn is_duplicate(&self, title: &str, issue_type: IssueType) -> bool {
        let needle = title.to_lowercase();
        self.issues
            .iter()
            .any(|issue| issue.issue_type == issue_type && issue.title.to_lowercase() == needle)
    }
}

impl Default for IssueStore {
    fn default() -> Self {
        Self::new()
    }
}
