//! Yerba Verde - landing page
//!
//! A server-rendered, hydrated storefront built with Leptos and WebAssembly.
//! The page opens behind a timed preloader and then reveals its sections as
//! they scroll into view.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
#[cfg(feature = "ssr")]
pub mod server;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
