//! Browser-side enhancements for the server-rendered blog.
//!
//! Load the generated module on every page; [`start`] binds the AJAX forms,
//! the like buttons, theme persistence and the smaller page effects to
//! whatever markup is present. Page scripts can show notifications and
//! register form success callbacks through the exported functions.

mod api;
mod callbacks;
mod components;
mod config;
mod dom;
mod enhance;

use blogsite_shared::Severity;
use wasm_bindgen::prelude::*;
use web_sys::Event;

pub use callbacks::{
    register_js_success_callback, register_success_callback, unregister_js_success_callback,
    unregister_success_callback,
};
pub use components::notification_center::notify;
pub use config::{CSRF_COOKIE, LIKE_URL_PREFIX};

/// Module entry point, run once when the wasm module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }

    let Some(document) = dom::document() else {
        return;
    };
    if document.ready_state() == "loading" {
        dom::listen(&document, "DOMContentLoaded", |_: Event| enhance::enhance_page());
    } else {
        enhance::enhance_page();
    }
}

/// `showNotification(message, type)` for page scripts. `type` is one of
/// `info`, `success`, `error`, `warning`; anything else shows as `info`.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: String, severity: Option<String>) {
    let severity = severity
        .as_deref()
        .and_then(|name| name.parse::<Severity>().ok())
        .unwrap_or_default();
    notify(message, severity);
}
