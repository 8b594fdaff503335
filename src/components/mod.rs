pub mod rating_input;
pub mod review_card;
pub mod review_form;
pub mod reviews_carousel;
pub mod user_review;
