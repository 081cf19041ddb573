//! Creation input and view-filter types.

use std::fmt;
use std::str::FromStr;

use crate::model::{Issue, IssueType, Status};

/// Input for creating an issue.
///
/// Required-field checks (non-empty title, reporter, keywords) belong to
/// the form layer; the store only rejects duplicates.
#[derive(Debug, Clone, Default)]
pub struct NewIssue {
    pub title: String,
    pub issue_type: IssueType,
    pub raised_by: String,
    pub keywords: Vec<String>,
    pub description: Option<String>,
    /// At most one attachment may accompany a new issue.
    pub attachment: Option<String>,
}

/// Status criterion for the derived view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    #[must_use]
    pub fn matches(self, status: Status) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Only(status) => write!(f, "{status}"),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = crate::error::FixdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<Status>().map(Self::Only)
    }
}

/// Type criterion for the derived view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Only(IssueType),
}

impl TypeFilter {
    #[must_use]
    pub fn matches(self, issue_type: IssueType) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == issue_type,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Only(issue_type) => write!(f, "{issue_type}"),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = crate::error::FixdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<IssueType>().map(Self::Only)
    }
}

/// The three view criteria, combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewFilters {
    pub status: StatusFilter,
    pub issue_type: TypeFilter,
    /// Case-insensitive substring; empty means no search constraint.
    pub search: String,
}

impl ViewFilters {
    /// True when the issue passes all three criteria.
    #[must_use]
    pub fn matches(&self, issue: &Issue) -> bool {
        self.status.matches(issue.status)
            && self.issue_type.matches(issue.issue_type)
            && self.matches_search(issue)
    }

    /// The search term matches against title, any keyword, or the type
    /// name. Descriptions are not searched.
    fn matches_search(&self, issue: &Issue) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        issue.title.to_lowercase().contains(&term)
            || issue
                .keywords
                .iter()
                .any(|keyword| keyword.to_lowercase().contains(&term))
            || issue.issue_type.as_str().to_lowercase().contains(&term)
    }

    /// True when every criterion is at its default (view == collection).
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.status == StatusFilter::All
            && self.issue_type == TypeFilter::All
            && self.search.is_empty()
    }
}
