//! Store fakes for exercising the review widget without a browser.
//! `SharedStore` handles can be cloned so a test can "reopen" the same storage
//! the way a page reload would.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use userreview::error::StoreError;
use userreview::store::Store;

#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<RefCell<usize>>,
}

impl SharedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn put_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl Store for SharedStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.raw(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.put_raw(key, value);
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}

/// Mimics a browser with storage disabled or over quota.
#[derive(Debug, Clone, Default)]
pub struct QuotaExceededStore {
    pub attempts: Rc<RefCell<usize>>,
}

impl Store for QuotaExceededStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), StoreError> {
        *self.attempts.borrow_mut() += 1;
        Err(StoreError::WriteFailed {
            key: key.to_string(),
            message: "QuotaExceededError".to_string(),
        })
    }
}

/// Reads fail outright, as when storage access is blocked.
#[derive(Debug, Clone, Default)]
pub struct BlockedStore;

impl Store for BlockedStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("SecurityError".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("SecurityError".to_string()))
    }
}
