//! # nyumba-client
//!
//! Leptos front end for the NyumbaYangu rental marketplace: the public landing
//! page and the landlord console. Rendered on the server by the `nyumba` host
//! (`ssr` feature) and hydrated in the browser (`hydrate` feature).
//!
//! All records come from JSON fixtures behind [`data::RecordSource`]; there is
//! no backend API.

pub mod app;
pub mod components;
pub mod data;
pub mod map;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic and log hooks, then hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
