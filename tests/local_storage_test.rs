#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use userreview::models::review::Review;
use userreview::store::{LocalStorage, ReviewStore, Store};

wasm_bindgen_test_configure!(run_in_browser);

const TEST_KEY: &str = "reviews-wasm-test";

fn clear() {
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item(TEST_KEY).unwrap();
}

#[wasm_bindgen_test]
fn test_local_storage_round_trip() {
    clear();
    let mut reviews = ReviewStore::with_key(LocalStorage, TEST_KEY);
    assert!(reviews.load().is_empty());

    reviews.add(Review::new("Alice", 4.0, "Good stuff")).unwrap();
    reviews.add(Review::new("Bob", 3.5, "Okay")).unwrap();

    let mut reopened = ReviewStore::with_key(LocalStorage, TEST_KEY);
    assert_eq!(reopened.load(), reviews.reviews());
    clear();
}

#[wasm_bindgen_test]
fn test_local_storage_corrupt_value() {
    clear();
    let mut raw = LocalStorage;
    raw.set(TEST_KEY, "definitely not json").unwrap();

    let mut reviews = ReviewStore::with_key(LocalStorage, TEST_KEY);
    assert!(reviews.load().is_empty());
    clear();
}
