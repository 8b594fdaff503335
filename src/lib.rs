pub mod app;
pub mod board;
pub mod carousel;
pub mod components;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod utils;
pub mod validation;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;

    utils::panic_hook::init();
    leptos::mount_to_body(App);
}
