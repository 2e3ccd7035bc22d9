//! # portfolio
//!
//! Leptos + WASM frontend for the portfolio "Project Showcase" section: a
//! grid of project cards and a full-screen image carousel opened from them.
//!
//! Navigation, swipe and click-origin rules live in [`state`] and are tested
//! natively. [`components`] wires them to the DOM, and [`util`] holds the
//! browser glue, which compiles to inert stubs without the `csr` feature.

pub mod app;
pub mod components;
pub mod consts;
pub mod state;
pub mod util;

/// Install console logging and the panic hook, then mount [`app::App`] on
/// `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
