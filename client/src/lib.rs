//! # client
//!
//! Leptos + WASM frontend for the notice drafting assistant: a chat page that
//! drafts notices conversationally, a management page for the stored
//! collection, and a form-based generator.
//!
//! The crate is compiled twice: with `ssr` into the server binary for the
//! initial render, and with `hydrate` to WASM for the browser. Every network
//! and DOM effect is gated behind `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
