/// Form validation for new reviews.
/// Only the text fields gate submission; the rating widget keeps its own range.
use std::fmt;

use crate::models::review::DraftReview;

pub const MIN_TEXT_LEN: usize = 3;
pub const NAME_TOO_SHORT: &str = "Name must be at least 3 characters";
pub const FEEDBACK_TOO_SHORT: &str = "Feedback must be at least 3 characters";

/// Per-field messages shown under the inputs. An empty string means no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: String,
    pub feedback: String,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.feedback.is_empty()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = [self.name.as_str(), self.feedback.as_str()]
            .into_iter()
            .filter(|m| !m.is_empty())
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}

fn long_enough(text: &str) -> bool {
    text.trim().chars().count() >= MIN_TEXT_LEN
}

/// Checks both text fields independently so every message can be shown at once.
pub fn validate(draft: &DraftReview) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if !long_enough(&draft.name) {
        errors.name = NAME_TOO_SHORT.to_string();
    }
    if !long_enough(&draft.feedback) {
        errors.feedback = FEEDBACK_TOO_SHORT.to_string();
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, feedback: &str) -> DraftReview {
        DraftReview {
            name: name.into(),
            rating: 5.0,
            feedback: feedback.into(),
        }
    }

    #[test]
    fn test_short_name_only_flags_name() {
        let errors = validate(&draft("Al", "Great")).unwrap_err();
        assert_eq!(errors.name, NAME_TOO_SHORT);
        assert_eq!(errors.feedback, "");
    }

    #[test]
    fn test_both_fields_reported_together() {
        let errors = validate(&draft("", "no")).unwrap_err();
        assert_eq!(errors.name, NAME_TOO_SHORT);
        assert_eq!(errors.feedback, FEEDBACK_TOO_SHORT);
        assert_eq!(errors.to_string(), format!("{}; {}", NAME_TOO_SHORT, FEEDBACK_TOO_SHORT));
    }

    #[test]
    fn test_boundary_is_inclusive() {
        assert!(validate(&draft("Ann", "yes")).is_ok());
    }

    #[test]
    fn test_whitespace_does_not_count() {
        let errors = validate(&draft("  Al   ", "\tok\n")).unwrap_err();
        assert!(!errors.name.is_empty());
        assert!(!errors.feedback.is_empty());
        assert!(validate(&draft("  Ann  ", "  good  ")).is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        assert!(validate(&draft("Zoë", "très")).is_ok());
        assert!(validate(&draft("日本", "良い")).is_err());
    }

    #[test]
    fn test_rating_is_not_checked() {
        let mut d = draft("Alice", "Good stuff");
        d.rating = 42.0;
        assert!(validate(&d).is_ok());
    }
}
