//! Navshell - collapsible sidebar navigation and login/signup shell
//!
//! Framework-free state machines live in `core`; the Leptos components in
//! `ui` render them.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
