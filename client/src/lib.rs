//! # client
//!
//! Leptos + WASM frontend for the meme gallery.
//!
//! The crate owns the accessibility preference store (font size and color
//! theme, persisted to `localStorage`), the provider that shares it through
//! Leptos context, and the gallery page that consumes it. The store and its
//! value types are plain Rust and are tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger not installed: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
