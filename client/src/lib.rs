//! # client
//!
//! Leptos + WASM frontend for Quill, the freelancer contract and invoicing
//! app. Rendered on the server by the `server` crate and hydrated in the
//! browser.
//!
//! This crate contains pages, components, session state, and the REST
//! helpers that talk to the managed backend. Route access is decided by the
//! `gate` crate; [`components::auth_gate::AuthGate`] binds it to the router.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
