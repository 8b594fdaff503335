// src/models/review.rs
use serde::{Deserialize, Serialize};

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;
pub const DEFAULT_RATING: f64 = 5.0;

/// An admitted review. Stored in insertion order; its position in the list is
/// its identity, so two identical reviews are still two reviews.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub name: String,     // Display name of the reviewer
    pub rating: f64,      // Rating in [1, 5], may be fractional
    pub feedback: String, // Free-text feedback
}

impl Review {
    pub fn new(name: impl Into<String>, rating: f64, feedback: impl Into<String>) -> Self {
        Review {
            name: name.into(),
            rating,
            feedback: feedback.into(),
        }
    }

    /// Number of whole stars shown on a card.
    pub fn star_count(&self) -> usize {
        if !self.rating.is_finite() || self.rating < 1.0 {
            return 0;
        }
        self.rating.trunc().min(MAX_RATING) as usize
    }
}

/// The review being edited in the form, not yet validated.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftReview {
    pub name: String,
    pub rating: f64,
    pub feedback: String,
}

impl Default for DraftReview {
    fn default() -> Self {
        DraftReview {
            name: String::new(),
            rating: DEFAULT_RATING,
            feedback: String::new(),
        }
    }
}

impl DraftReview {
    pub fn reset(&mut self) {
        *self = DraftReview::default();
    }

    /// Text is kept as typed; trimming only applies to the length check.
    pub fn to_review(&self) -> Review {
        Review::new(self.name.clone(), self.rating, self.feedback.clone())
    }
}

/// Keeps a rating inside [1, 5]. Non-finite values fall back to the default.
pub fn clamp_rating(rating: f64) -> f64 {
    if rating.is_finite() {
        rating.clamp(MIN_RATING, MAX_RATING)
    } else {
        DEFAULT_RATING
    }
}

/// Parses a rating typed into the form, defaulting to 5 like the number input did.
pub fn parse_rating(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .map(clamp_rating)
        .unwrap_or(DEFAULT_RATING)
}

/// Rating from the number box while the user is typing. An empty box yields
/// `None` so the last rating is kept and the box can be cleared and retyped.
pub fn rating_from_input(raw: &str) -> Option<f64> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(parse_rating(raw))
    }
}
