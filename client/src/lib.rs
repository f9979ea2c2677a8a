//! Browser client for Artifact Keep.
//!
//! SYSTEM CONTEXT
//! ==============
//! This crate is the entire visible application: routing, pages, and form
//! components that call the external artifact API over HTTP. Persistence,
//! authorization, and validation live behind that API. Browser-only code is
//! gated on the `csr` cargo feature so the default feature set compiles and
//! tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: mounts the application onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
