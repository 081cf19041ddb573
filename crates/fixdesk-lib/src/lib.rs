//! `fixdesk-lib`: in-process issue desk state container.
//!
//! Owns a transient, insertion-ordered issue collection plus the view
//! criteria that derive a filtered listing from it. There is no storage
//! backend and no I/O: state lives exactly as long as the store.
//!
//! # Quick Start
//!
//! ```
//! use fixdesk_lib::{IssueStore, NewIssue, Status, StatusFilter};
//!
//! let mut store = IssueStore::new();
//!
//! // Create
//! let issue = store.create_issue(NewIssue {
//!     title: "Checkout button unresponsive".into(),
//!     raised_by: "Priya".into(),
//!     keywords: vec!["checkout".into(), "ui".into()],
//!     ..NewIssue::default()
//! }).unwrap();
//!
//! // Suggest and vote
//! let suggestion = store.add_suggestion(&issue.id, "Debounce the click handler").unwrap();
//! store.vote_suggestion(&issue.id, suggestion.id, true).unwrap();
//!
//! // Resolve, then view only what's still pending
//! store.resolve_issue(&issue.id).unwrap();
//! store.set_status_filter(StatusFilter::Only(Status::Pending));
//! assert!(store.filtered_issues().is_empty());
//! ```

pub mod error;
pub mod model;
pub mod query;
pub mod sample;
pub mod store;
pub mod util;

pub use error::{FixdeskError, Result, ValidationError};
pub use model::{Issue, IssueType, Status, Suggestion, VoteTally};
pub use query::{NewIssue, StatusFilter, TypeFilter, ViewFilters};
pub use store::IssueStore;
