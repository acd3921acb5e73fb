//! # tsunami-client
//!
//! Leptos + WASM frontend for the tsunami prediction dashboard.
//!
//! This crate contains pages, components, application state, the REST client
//! for the prediction backend, and the Google Maps bridge. It compiles with
//! `hydrate` for the browser and `ssr` for server rendering.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("tsunami dashboard hydrating");
    leptos::mount::hydrate_body(app::App);
}
