/// State behind the review widget: the stored list, the carousel cursor and the
/// feedback form. Every operation runs to completion before the next event is
/// handled, so the list and its saved copy are written together.
use leptos::logging::{error, log};

use crate::carousel::{ReviewCarousel, Slot};
use crate::error::ReviewError;
use crate::models::review::{clamp_rating, DraftReview, Review};
use crate::store::{ReviewStore, Store};
use crate::validation::{validate, FieldErrors};

/// A single field change coming from the form.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftEdit {
    Name(String),
    Rating(f64),
    Feedback(String),
}

#[derive(Debug)]
pub struct ReviewBoard<S: Store> {
    reviews: ReviewStore<S>,
    carousel: ReviewCarousel,
    draft: DraftReview,
    errors: FieldErrors,
    form_open: bool,
}

impl<S: Store> ReviewBoard<S> {
    pub fn new(reviews: ReviewStore<S>) -> Self {
        ReviewBoard {
            reviews,
            carousel: ReviewCarousel::new(),
            draft: DraftReview::default(),
            errors: FieldErrors::default(),
            form_open: false,
        }
    }

    pub fn load(&mut self) {
        let len = self.reviews.load().len();
        self.carousel.renormalize(len);
    }

    pub fn reviews(&self) -> &[Review] {
        self.reviews.reviews()
    }

    pub fn review_store(&self) -> &ReviewStore<S> {
        &self.reviews
    }

    pub fn draft(&self) -> &DraftReview {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn cursor(&self) -> usize {
        self.carousel.cursor()
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn open_form(&mut self) {
        self.form_open = true;
    }

    pub fn close_form(&mut self) {
        self.form_open = false;
    }

    pub fn set_name(&mut self, name: String) {
        self.draft.name = name;
    }

    pub fn set_rating(&mut self, rating: f64) {
        self.draft.rating = clamp_rating(rating);
    }

    pub fn set_feedback(&mut self, feedback: String) {
        self.draft.feedback = feedback;
    }

    pub fn edit(&mut self, edit: DraftEdit) {
        match edit {
            DraftEdit::Name(name) => self.set_name(name),
            DraftEdit::Rating(rating) => self.set_rating(rating),
            DraftEdit::Feedback(feedback) => self.set_feedback(feedback),
        }
    }

    /// Validates the draft and, if it passes, admits it.
    ///
    /// A persistence error is returned only after the review has been added in
    /// memory and the form has been reset, so the session carries on either way.
    pub fn submit(&mut self) -> Result<(), ReviewError> {
        if let Err(errors) = validate(&self.draft) {
            log!("[BOARD] Submission blocked: {}", errors);
            self.errors = errors.clone();
            return Err(ReviewError::Validation(errors));
        }

        let saved = self.reviews.add(self.draft.to_review());
        self.draft.reset();
        self.errors = FieldErrors::default();
        self.form_open = false;
        self.carousel.renormalize(self.reviews.len());

        saved.map_err(|e| {
            error!("[BOARD] Review kept in memory but not saved: {}", e);
            ReviewError::from(e)
        })
    }

    pub fn delete(&mut self, index: usize) -> Result<Review, ReviewError> {
        let removed = match self.reviews.delete(index) {
            Err(e @ ReviewError::IndexOutOfRange { .. }) => {
                error!("[BOARD] Refusing delete: {}", e);
                return Err(e);
            }
            other => other,
        };
        if let Err(e) = &removed {
            error!("[BOARD] Review removed in memory but not saved: {}", e);
        }
        self.carousel.renormalize(self.reviews.len());
        removed
    }

    /// Returns the new cursor, or `None` when there are no reviews to page through.
    pub fn next(&mut self) -> Option<usize> {
        self.carousel.next(self.reviews.len())
    }

    pub fn prev(&mut self) -> Option<usize> {
        self.carousel.prev(self.reviews.len())
    }

    pub fn window(&self) -> (Option<&Review>, Option<&Review>) {
        self.carousel.window(self.reviews.reviews())
    }

    pub fn slots(&self) -> [Option<Slot<'_>>; 2] {
        self.carousel.slots(self.reviews.reviews())
    }

    pub fn shows_navigation(&self) -> bool {
        ReviewCarousel::shows_navigation(self.reviews.len())
    }
}
