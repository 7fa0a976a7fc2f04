//! # folio-client
//!
//! Leptos + WASM frontend for the portfolio site: hero reveal, about panel,
//! project grid and the EmailJS-backed contact form.
//!
//! The same crate is compiled twice: with `ssr` into the Axum host for
//! server rendering, and with `hydrate` into WASM for the browser.

pub mod app;
pub mod components;
pub mod data;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::debug!("hydrating portfolio");
    leptos::mount::hydrate_body(app::App);
}
