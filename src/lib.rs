//! # portfolio
//!
//! Leptos personal-portfolio page: a header with social links, skills,
//! project cards, certifications, and a light/dark toggle.
//!
//! With the `ssr` feature (default) the page renders to HTML and the
//! `portfolio` binary exports it as static files. With `hydrate` the same
//! components compile to WASM and take over the exported markup in the
//! browser. `ssr` and `hydrate` are mutually exclusive; because `ssr` is a
//! default feature, WASM builds pass `--no-default-features --features hydrate`.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod export;
#[cfg(feature = "ssr")]
pub mod render;

/// WASM entry point: hydrates the exported page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
