//! # client
//!
//! Leptos + WASM storefront and admin UI for the SweetShop REST API.
//!
//! This crate contains pages, components, application state, the HTTP client
//! and its wire types. The `hydrate` feature builds the browser bundle; `ssr`
//! lets the host crate render the same routes on the server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
