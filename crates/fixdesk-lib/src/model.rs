//! Core data types for fixdesk-lib.
//!
//! Serde layout matches the fixdesk record format (camelCase keys,
//! `type` for the issue category) so JSON output is interoperable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Issue lifecycle status.
///
/// Wire strings are the variant names: `"Pending"`, `"Resolved"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Status {
    #[default]
    Pending,
    Resolved,
}

impl Status {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Resolved => "Resolved",
        }
    }

    #[must_use]
    pub const fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved)
    }

    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = crate::error::FixdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "resolved" => Ok(Self::Resolved),
            other => Err(crate::error::FixdeskError::InvalidStatus {
                status: other.to_string(),
            }),
        }
    }
}

/// Issue category.
///
/// A fixed enumeration; unknown values are rejected rather than carried
/// through as free-form strings. Wire strings are the variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IssueType {
    #[default]
    Common,
    Frontend,
    Backend,
    QA,
}

impl IssueType {
    pub const ALL: [Self; 4] = [Self::Common, Self::Frontend, Self::Backend, Self::QA];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::QA => "QA",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueType {
    type Err = crate::error::FixdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "common" => Ok(Self::Common),
            "frontend" => Ok(Self::Frontend),
            "backend" => Ok(Self::Backend),
            "qa" => Ok(Self::QA),
            other => Err(crate::error::FixdeskError::InvalidType {
                issue_type: other.to_string(),
            }),
        }
    }
}

/// Helpful / not-helpful counters for a suggestion.
///
/// Counters only ever increase. There is no per-voter bookkeeping:
/// repeated votes accumulate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteTally {
    pub helpful: u32,
    pub not_helpful: u32,
}

impl VoteTally {
    /// Record one vote, incrementing exactly one counter.
    pub const fn record(&mut self, helpful: bool) {
        if helpful {
            self.helpful += 1;
        } else {
            self.not_helpful += 1;
        }
    }

    #[must_use]
    pub const fn total(self) -> u32 {
        self.helpful.saturating_add(self.not_helpful)
    }
}

/// An improvement suggestion attached to an issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Suggestion {
    /// Sequential ID, unique within the store.
    pub id: i64,

    /// Suggestion text.
    pub text: String,

    /// Vote counters, both starting at zero.
    #[serde(default)]
    pub votes: VoteTally,
}

impl Suggestion {
    /// Render the ID the way the UI shows it (e.g. "s3").
    #[must_use]
    pub fn display_id(&self) -> String {
        format!("s{}", self.id)
    }
}

/// The primary issue entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Unique ID (e.g., "fx-abc123").
    pub id: String,

    /// Title. No two issues share a title (case-insensitive) and type.
    pub title: String,

    /// Issue category.
    #[serde(rename = "type", default)]
    pub issue_type: IssueType,

    /// Who reported the issue.
    pub raised_by: String,

    /// Search keywords.
    pub keywords: Vec<String>,

    /// Detailed description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Attachment references. Creation seeds at most one; reopening
    /// appends, and entries are never removed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<String>,

    /// Lifecycle status.
    #[serde(default)]
    pub status: Status,

    /// Creation timestamp, fixed for the issue's lifetime.
    pub created_at: DateTime<Utc>,

    /// Suggestions in the order they were added.
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

impl Default for Issue {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            issue_type: IssueType::default(),
            raised_by: String::new(),
            keywords: Vec::new(),
            description: None,
            attachments: Vec::new(),
            status: Status::default(),
            created_at: Utc::now(),
            suggestions: Vec::new(),
        }
    }
}

impl Issue {
    /// Look up a suggestion by ID.
    #[must_use]
    pub fn suggestion(&self, suggestion_id: i64) -> Option<&Suggestion> {
        self.suggestions.iter().find(|s| s.id == suggestion_id)
    }

    pub(crate) fn suggestion_mut(&mut self, suggestion_id: i64) -> Option<&mut Suggestion> {
        self.suggestions.iter_mut().find(|s| s.id == suggestion_id)
    }
}
