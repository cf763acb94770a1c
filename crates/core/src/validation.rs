//! Input validation helpers shared by the API handlers.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;
use crate::prompt::MAX_DESCRIPTION_LENGTH;

/// Pattern for a plausible email address: something@something.tld, no
/// whitespace. Deliberately loose; deliverability is the mail server's
/// problem.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Compiled email regex. Compiled once, reused forever.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// Validate an email address format.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if !EMAIL_RE.is_match(email) {
        return Err(CoreError::Validation(format!(
            "Invalid email format: {email}"
        )));
    }
    Ok(())
}

/// Validate that a required text field is present after trimming.
///
/// `field` names the offending field in the error message so clients can
/// point at the right input.
pub fn validate_required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Validate a tattoo description: required and within length limit.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    validate_required("description", description)?;
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "description exceeds maximum length of {MAX_DESCRIPTION_LENGTH} characters (got {})",
            description.len()
        )));
    }
    Ok(())
}

/// Validate a testimonial rating: 1 through 5 inclusive.
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if !(1..=5).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "Rating must be between 1 and 5 (got {rating})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_email() {
        assert!(validate_email("client@example.com").is_ok());
    }

    #[test]
    fn rejects_email_without_at() {
        assert!(validate_email("client.example.com").is_err());
    }

    #[test]
    fn rejects_email_with_whitespace() {
        assert!(validate_email("cli ent@example.com").is_err());
    }

    #[test]
    fn rejects_email_without_tld_dot() {
        assert!(validate_email("client@localhost").is_err());
    }

    #[test]
    fn required_field_error_names_the_field() {
        let err = validate_required("description", "   ").unwrap_err();
        assert!(err.to_string().contains("description is required"));
    }

    #[test]
    fn description_over_limit_rejected() {
        let long = "x".repeat(MAX_DESCRIPTION_LENGTH + 1);
        assert!(validate_description(&long).is_err());
    }

    #[test]
    fn description_at_limit_passes() {
        let exact = "x".repeat(MAX_DESCRIPTION_LENGTH);
        assert!(validate_description(&exact).is_ok());
    }

    #[test]
    fn rating_bounds() {
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }
}
