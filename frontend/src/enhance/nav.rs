use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, Node};

use crate::{config, dom};

pub(crate) fn init() {
    init_mobile_menu();
    init_dropdowns();
    init_delete_confirmation();
}

fn set_expanded(toggle: &Element, expanded: bool) {
    let _ = toggle.set_attribute("aria-expanded", if expanded { "true" } else { "false" });
}

fn init_mobile_menu() {
    let (Some(toggle), Some(menu), Some(document)) = (
        dom::by_id(config::MOBILE_MENU_TOGGLE_ID),
        dom::by_id(config::MOBILE_MENU_ID),
        dom::document(),
    ) else {
        return;
    };

    let set_open = {
        let toggle = toggle.clone();
        let menu = menu.clone();
        move |open: bool| {
            dom::set_class(&menu, config::SHOW_CLASS, open);
            if let Some(body) = dom::body() {
                dom::set_class(&body, config::MENU_OPEN_CLASS, open);
            }
            set_expanded(&toggle, open);
        }
    };

    {
        let menu = menu.clone();
        let set_open = set_open.clone();
        dom::listen(&toggle, "click", move |_: MouseEvent| {
            let open = !menu.class_list().contains(config::SHOW_CLASS);
            set_open(open);
        });
    }

    dom::listen(&document, "click", move |event: Event| {
        if !menu.class_list().contains(config::SHOW_CLASS) {
            return;
        }
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        if !menu.contains(target.as_ref()) && !toggle.contains(target.as_ref()) {
            set_open(false);
        }
    });
}

fn close_dropdown(menu: &Element) {
    dom::remove_class(menu, config::SHOW_CLASS);
    if let Some(toggle) = menu.previous_element_sibling() {
        set_expanded(&toggle, false);
    }
}

fn init_dropdowns() {
    for toggle in dom::select_all(config::DROPDOWN_TOGGLE_SELECTOR) {
        let target = toggle.clone();
        dom::listen(&toggle, "click", move |event: MouseEvent| {
            event.prevent_default();
            event.stop_propagation();

            let Some(menu) = target.next_element_sibling() else {
                return;
            };
            for open in dom::select_all(config::OPEN_DROPDOWN_SELECTOR) {
                if open != menu {
                    close_dropdown(&open);
                }
            }
            let open = dom::toggle_class(&menu, config::SHOW_CLASS);
            set_expanded(&target, open);
        });
    }

    let Some(document) = dom::document() else {
        return;
    };
    dom::listen(&document, "click", |event: Event| {
        let inside = dom::target_element(&event)
            .and_then(|target| target.closest(config::DROPDOWN_SELECTOR).ok().flatten())
            .is_some();
        if !inside {
            for open in dom::select_all(config::OPEN_DROPDOWN_SELECTOR) {
                close_dropdown(&open);
            }
        }
    });
}

fn delete_prompt(item_name: &str) -> String {
    format!("Are you sure you want to delete \"{item_name}\"? This action cannot be undone.")
}

/// `<a href="/posts/5/delete/" data-confirm-delete data-item-name="My post">`
/// only navigates once the reader confirms. A non-empty
/// `data-confirm-delete` value overrides the link target.
fn init_delete_confirmation() {
    for trigger in dom::select_all(config::CONFIRM_DELETE_SELECTOR) {
        let target = trigger.clone();
        dom::listen(&trigger, "click", move |event: MouseEvent| {
            event.prevent_default();
            let url = target
                .get_attribute("data-confirm-delete")
                .filter(|url| !url.trim().is_empty())
                .or_else(|| target.get_attribute("href"));
            let Some(url) = url else {
                return;
            };
            let name = target
                .get_attribute("data-item-name")
                .unwrap_or_else(|| "this item".to_string());

            let Some(window) = dom::window() else {
                return;
            };
            if window.confirm_with_message(&delete_prompt(&name)).unwrap_or(false) {
                if let Err(err) = window.location().set_href(&url) {
                    log::error!("navigation to {url} failed: {err:?}");
                }
            }
        });
    }
}
