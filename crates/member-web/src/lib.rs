//! Membership Site Frontend
//!
//! Leptos-based WASM frontend: a branded landing page plus the gated member
//! dashboards. All branding and copy comes from `member-core`'s `SITE`
//! configuration; the backend is an opaque HTTP API.

mod api;
mod app;
mod components;
mod flows;
mod pages;
mod session;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
