//! # pdpl-console
//!
//! Leptos + WASM administrative console for a PDPL compliance program:
//! gap assessments, DPIA wizard, user management, and a self-service portal
//! where end users file and track privacy cases.
//!
//! The crate is a presentation layer. Every data operation is a thin call to
//! the REST backend through `net::http`; local state is limited to form
//! inputs, UI chrome, and the persisted session (`state::session`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
