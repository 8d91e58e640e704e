//! # ticketapp
//!
//! Leptos + WASM client for TicketApp with mock authentication.
//!
//! The session store persists an opaque token and the user profile in
//! browser storage; the route guard keeps signed-out users off the dashboard
//! and ticket pages. Everything except the browser glue behind the `csr`
//! feature builds and tests on the host.

pub mod app;
pub mod auth;
pub mod components;
pub mod pages;
pub mod router;
pub mod session;
pub mod state;
pub mod storage;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
