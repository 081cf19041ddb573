//! Text formatting functions for `fixdesk`.
//!
//! Provides plain text (non-ANSI) formatting for terminal output:
//! - Status icons (○ ✓)
//! - Type badges ([Backend], [QA], etc.)
//! - Issue line and table formatting

use fixdesk_lib::{Issue, IssueType, Status, Suggestion, VoteTally};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Status icon characters.
pub mod icons {
    /// Pending issue - awaiting a fix (hollow circle).
    pub const PENDING: &str = "○";
    /// Resolved issue - fixed (checkmark).
    pub const RESOLVED: &str = "✓";
}

/// Return the icon character for a status.
#[must_use]
pub const fn format_status_icon(status: Status) -> &'static str {
    match status {
        Status::Pending => icons::PENDING,
        Status::Resolved => icons::RESOLVED,
    }
}

/// Format issue type as a bracketed badge.
#[must_use]
pub fn format_type_badge(issue_type: IssueType) -> String {
    format!("[{}]", issue_type.as_str())
}

/// Format a vote tally as `+helpful/-notHelpful`.
#[must_use]
pub fn format_votes(votes: VoteTally) -> String {
    format!("+{}/-{}", votes.helpful, votes.not_helpful)
}

/// Format a single-line issue summary.
///
/// Format: `{icon} {id} [{type}] {title}`
#[must_use]
pub fn format_issue_line(issue: &Issue) -> String {
    format!(
        "{} {} {} {}",
        format_status_icon(issue.status),
        issue.id,
        format_type_badge(issue.issue_type),
        issue.title,
    )
}

/// Format a single-line suggestion summary.
///
/// Format: `{display_id} [{votes}] {text}`
#[must_use]
pub fn format_suggestion_line(suggestion: &Suggestion) -> String {
    format!(
        "{} [{}] {}",
        suggestion.display_id(),
        format_votes(suggestion.votes),
        suggestion.text,
    )
}

/// Width used for table rendering: the terminal width when stdout is a
/// TTY, a fixed 100 columns otherwise (pipes, tests).
#[must_use]
pub fn terminal_width() -> usize {
    use crossterm::tty::IsTty;

    if std::io::stdout().is_tty() {
        crossterm::terminal::size().map_or(100, |(w, _)| usize::from(w))
    } else {
        100
    }
}

/// Truncate a string to a display width, appending an ellipsis when cut.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut result = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + char_width > budget {
            break;
        }
        result.push(ch);
        used += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(text: &str, width: usize) -> String {
    let current = text.width();
    if current >= width {
        text.to_string()
    } else {
        format!("{text}{}", " ".repeat(width - current))
    }
}

/// Render issues as a fixed-width table.
///
/// Columns: ID, STATUS, TYPE, RAISED BY, TITLE. The title column absorbs
/// whatever width remains and is truncated to fit.
#[must_use]
pub fn format_issue_table(issues: &[&Issue], max_width: usize) -> String {
    const STATUS_WIDTH: usize = 10; // "○ Resolved"
    const TYPE_WIDTH: usize = 8; // "Frontend"
    const GAP: usize = 2;

    let id_width = issues
        .iter()
        .map(|issue| issue.id.width())
        .chain(std::iter::once("ID".width()))
        .max()
        .unwrap_or(2);
    let raised_by_width = issues
        .iter()
        .map(|issue| issue.raised_by.width())
        .chain(std::iter::once("RAISED BY".width()))
        .max()
        .unwrap_or(9)
        .min(20);

    let fixed = id_width + STATUS_WIDTH + TYPE_WIDTH + raised_by_width + GAP * 4;
    let title_width = max_width.saturating_sub(fixed).max(12);

    let mut out = String::new();
    let header = [
        pad_to_width("ID", id_width),
        pad_to_width("STATUS", STATUS_WIDTH),
        pad_to_width("TYPE", TYPE_WIDTH),
        pad_to_width("RAISED BY", raised_by_width),
        "TITLE".to_string(),
    ]
    .join(&" ".repeat(GAP));
    out.push_str(header.trim_end());
    out.push('\n');
    out.push_str(&"-".repeat(header.width().min(max_width)));
    out.push('\n');

    for issue in issues {
        let status = format!(
            "{} {}",
            format_status_icon(issue.status),
            issue.status.as_str()
        );
        let row = [
            pad_to_width(&issue.id, id_width),
            pad_to_width(&status, STATUS_WIDTH),
            pad_to_width(issue.issue_type.as_str(), TYPE_WIDTH),
            pad_to_width(
                &truncate_to_width(&issue.raised_by, raised_by_width),
                raised_by_width,
            ),
            truncate_to_width(&issue.title, title_width),
        ]
        .join(&" ".repeat(GAP));
        out.push_str(row.trim_end());
        out.push('\n');
    }

    out
}
