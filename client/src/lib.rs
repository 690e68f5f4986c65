//! # client
//!
//! Leptos + WASM frontend for the campus gamification platform.
//!
//! This crate contains pages, components, application state and the REST
//! client for the challenge backend. The `campus` host renders it on the
//! server (`ssr`) and the browser hydrates it (`hydrate`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the generated WASM glue.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
