use std::cell::RefCell;

use blogsite_shared::{CallbackRegistry, SuccessCallback};
use serde_json::Value;
use wasm_bindgen::prelude::*;

thread_local! {
    static REGISTRY: RefCell<CallbackRegistry> = RefCell::new(CallbackRegistry::new());
}

/// Register a handler that forms reference with `data-success-callback="name"`.
/// A later registration under the same name replaces the earlier one.
pub fn register_success_callback<F>(name: impl Into<String>, handler: F)
where
    F: Fn(&Value) + 'static,
{
    let name = name.into();
    let replaced = REGISTRY.with(|registry| registry.borrow_mut().register(name.clone(), handler));
    if replaced.is_some() {
        log::debug!("success callback `{name}` replaced");
    }
}

/// Remove the handler registered under `name`.
pub fn unregister_success_callback(name: &str) -> bool {
    REGISTRY.with(|registry| registry.borrow_mut().unregister(name))
}

/// Resolve `name`. The borrow is released before the handler can run.
pub(crate) fn lookup(name: &str) -> Option<SuccessCallback> {
    let found = REGISTRY.with(|registry| registry.borrow().get(name));
    if found.is_none() {
        log::warn!("no success callback registered as `{name}`");
    }
    found
}

/// Page-script entry point: `registerSuccessCallback("name", payload => ...)`.
/// The handler receives the reply as a plain JS object.
#[wasm_bindgen(js_name = registerSuccessCallback)]
pub fn register_js_success_callback(name: String, handler: js_sys::Function) {
    let label = name.clone();
    register_success_callback(name, move |payload| {
        let arg = js_sys::JSON::parse(&payload.to_string()).unwrap_or(JsValue::NULL);
        if let Err(err) = handler.call1(&JsValue::NULL, &arg) {
            log::error!("success callback `{label}` threw: {err:?}");
        }
    });
}

/// Page-script counterpart of [`unregister_success_callback`].
#[wasm_bindgen(js_name = unregisterSuccessCallback)]
pub fn unregister_js_success_callback(name: &str) -> bool {
    unregister_success_callback(name)
}
