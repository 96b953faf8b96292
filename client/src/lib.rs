//! # client
//!
//! Leptos frontend for the identity verification comparison demo.
//!
//! Contrasts a centralized directory lookup with a simulated blockchain
//! flow, plus mock key generation, signing, a decorative node grid, and a
//! static performance comparison. Nothing here is real cryptography.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
