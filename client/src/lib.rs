//! # client
//!
//! Leptos frontend for the Hibrid Shopp breeder site: landing page, gallery,
//! puppy listing, visit booking and the admin content panel.
//!
//! All site data lives in the browser. `state::content::ContentStore` owns
//! every collection and mirrors each one to `localStorage`; the server crate
//! only renders the shell and serves the bundle.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
