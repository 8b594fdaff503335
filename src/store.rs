/// Persistence for the review list.
/// The whole list lives under a single key as a JSON array and is rewritten on
/// every mutation. Backends implement `Store`, so the widget never reaches for
/// `window.localStorage` directly.
use std::collections::HashMap;

use leptos::logging::{log, warn};

use crate::error::{PersistenceError, ReviewError, StoreError};
use crate::models::review::{clamp_rating, Review};

pub const REVIEWS_KEY: &str = "reviews";

/// Key-value capability the review list is saved into.
pub trait Store {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store, used for server rendering and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Browser `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    #[cfg(target_arch = "wasm32")]
    fn storage(&self) -> Result<web_sys::Storage, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn storage(&self) -> Result<web_sys::Storage, StoreError> {
        Err(StoreError::Unavailable(
            "localStorage only exists in the browser".to_string(),
        ))
    }
}

impl Store for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StoreError::ReadFailed {
                key: key.to_string(),
                message: format!("{:?}", e),
            })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::WriteFailed {
                key: key.to_string(),
                message: format!("{:?}", e),
            })
    }
}

pub fn encode_reviews(reviews: &[Review]) -> Result<String, serde_json::Error> {
    serde_json::to_string(reviews)
}

pub fn decode_reviews(raw: &str) -> Result<Vec<Review>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Owns the canonical review list and keeps the store in step with it.
#[derive(Debug)]
pub struct ReviewStore<S: Store> {
    store: S,
    key: String,
    reviews: Vec<Review>,
}

impl<S: Store> ReviewStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, REVIEWS_KEY)
    }

    pub fn with_key(store: S, key: &str) -> Self {
        ReviewStore {
            store,
            key: key.to_string(),
            reviews: Vec::new(),
        }
    }

    /// Replaces the in-memory list with what the store holds.
    /// Missing, unreadable or corrupt data all load as an empty list.
    pub fn load(&mut self) -> &[Review] {
        self.reviews = match self.store.get(&self.key) {
            Ok(Some(raw)) => decode_reviews(&raw).unwrap_or_else(|e| {
                warn!("[STORE] Stored reviews under '{}' are corrupt, starting empty: {}", self.key, e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("[STORE] Could not read reviews, starting empty: {}", e);
                Vec::new()
            }
        };
        log!("[STORE] Loaded {} reviews", self.reviews.len());
        &self.reviews
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Review> {
        self.reviews.get(index)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Appends a review and saves the full list.
    /// The rating is clamped to [1, 5]; JSON has no NaN, so a non-finite rating
    /// would be saved as `null` and fail to load.
    /// On error the review is still in memory; only the saved copy is stale.
    pub fn add(&mut self, mut review: Review) -> Result<(), PersistenceError> {
        review.rating = clamp_rating(review.rating);
        self.reviews.push(review);
        self.persist()
    }

    /// Removes the review at `index` and saves the full list.
    pub fn delete(&mut self, index: usize) -> Result<Review, ReviewError> {
        if index >= self.reviews.len() {
            return Err(ReviewError::IndexOutOfRange {
                index,
                len: self.reviews.len(),
            });
        }
        let removed = self.reviews.remove(index);
        self.persist()?;
        Ok(removed)
    }

    fn persist(&mut self) -> Result<(), PersistenceError> {
        let encoded = encode_reviews(&self.reviews)?;
        self.store.set(&self.key, &encoded)?;
        log!("[STORE] Saved {} reviews under '{}'", self.reviews.len(), self.key);
        Ok(())
    }
}
