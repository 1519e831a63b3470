//! Project browser for a block/text code editor, built with Leptos.
//!
//! SYSTEM CONTEXT
//! ==============
//! `state` and `data` hold pure view-model logic that compiles and is tested
//! natively. `services` sequences editor, workspace, and network calls
//! behind traits; `components` renders them. Browser bindings are compiled
//! only with the `hydrate` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod data;
pub mod error;
pub mod net;
pub mod services;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logging unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
