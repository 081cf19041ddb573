//! Form-boundary validation for `fixdesk`.
//!
//! Required-field checks live here, at the presentation edge; the store
//! itself only enforces the duplicate rule and the reopen attachment.
//! Validators return structured errors without touching the store.

use fixdesk_lib::ValidationError;

/// Validates the issue creation form.
pub struct IssueFormValidator;

impl IssueFormValidator {
    /// Validate the creation fields and return all errors found.
    ///
    /// # Errors
    ///
    /// Returns a `Vec<ValidationError>` if any required field is missing.
    pub fn validate(
        title: &str,
        raised_by: &str,
        keywords: &[String],
    ) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if title.trim().is_empty() {
            errors.push(ValidationError::new("title", "cannot be empty"));
        }

        if raised_by.trim().is_empty() {
            errors.push(ValidationError::new("raised-by", "cannot be empty"));
        }

        if keywords.iter().all(|keyword| keyword.trim().is_empty()) {
            errors.push(ValidationError::new(
                "keywords",
                "at least one keyword is required",
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Validates the attachment supplied when reopening an issue.
pub struct AttachmentValidator;

impl AttachmentValidator {
    /// Validate a reopen attachment reference.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the reference is empty or whitespace.
    pub fn validate(attachment: &str) -> Result<(), ValidationError> {
        if attachment.trim().is_empty() {
            return Err(ValidationError::new(
                "attachment",
                "reopening requires an attachment reference",
            ));
        }

        Ok(())
    }
}

/// Split comma-separated keyword arguments, trimming and dropping empties.
///
/// `["api, connection", "error"]` becomes `["api", "connection", "error"]`.
#[must_use]
pub fn split_keywords(values: &[String]) -> Vec<String> {
    values
        .iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(ToString::to_string)
        .collect()
}
