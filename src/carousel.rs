/// Circular two-at-a-time pagination over the review list.
/// The cursor is reduced modulo the current length whenever it is used, so it
/// stays valid when reviews are added or deleted underneath it.
use leptos::logging::warn;

use crate::models::review::Review;

/// Reviews shown side by side.
pub const PAGE_SIZE: usize = 2;

pub fn next_index(cursor: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((cursor % len + 1) % len)
}

pub fn prev_index(cursor: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((cursor % len + len - 1) % len)
}

/// A visible card: the review plus its position in the list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot<'a> {
    pub index: usize,
    pub review: &'a Review,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewCarousel {
    cursor: usize,
}

impl ReviewCarousel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Both visible slots. With a single review the second slot wraps onto the first.
    pub fn slots<'a>(&self, reviews: &'a [Review]) -> [Option<Slot<'a>>; PAGE_SIZE] {
        let len = reviews.len();
        if len == 0 {
            return [None, None];
        }
        let first = self.cursor % len;
        let second = (first + 1) % len;
        [
            Some(Slot { index: first, review: &reviews[first] }),
            Some(Slot { index: second, review: &reviews[second] }),
        ]
    }

    pub fn window<'a>(&self, reviews: &'a [Review]) -> (Option<&'a Review>, Option<&'a Review>) {
        let [first, second] = self.slots(reviews);
        (first.map(|s| s.review), second.map(|s| s.review))
    }

    /// Moves one review forward and returns the new cursor.
    /// `None` means there was nothing to navigate; the cursor is left alone.
    pub fn next(&mut self, len: usize) -> Option<usize> {
        self.step(next_index(self.cursor, len), "next")
    }

    /// Moves one review back; see `next`.
    pub fn prev(&mut self, len: usize) -> Option<usize> {
        self.step(prev_index(self.cursor, len), "prev")
    }

    fn step(&mut self, target: Option<usize>, action: &str) -> Option<usize> {
        match target {
            Some(cursor) => self.cursor = cursor,
            None => warn!("[CAROUSEL] {} called with no reviews", action),
        }
        target
    }

    /// Pulls the cursor back inside `[0, len)` after the list changed length.
    pub fn renormalize(&mut self, len: usize) {
        self.cursor = if len == 0 { 0 } else { self.cursor % len };
    }

    /// Navigation only matters once there are more reviews than fit in one window.
    pub fn shows_navigation(len: usize) -> bool {
        len > PAGE_SIZE
    }
}
