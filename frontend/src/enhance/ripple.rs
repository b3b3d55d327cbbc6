use blogsite_shared::layout::{ripple_offset, RIPPLE_LIFETIME_MS};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use crate::{config, dom};

pub(crate) fn init() {
    for button in dom::select_all(config::RIPPLE_SELECTOR) {
        let host = button.clone();
        dom::listen(&button, "click", move |event: MouseEvent| spawn_ripple(&host, &event));
    }
}

fn spawn_ripple(host: &Element, event: &MouseEvent) {
    // Offsets are measured against the element actually clicked, which may be
    // an icon inside the button.
    let Some(clicked) = dom::target_element(event) else {
        return;
    };
    let (x, y) = ripple_offset(
        f64::from(event.client_x()),
        f64::from(event.client_y()),
        dom::bounding_rect(&clicked),
    );

    let Some(ripple) = dom::document()
        .and_then(|doc| doc.create_element("span").ok())
        .and_then(|span| span.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    dom::add_class(&ripple, "ripple");
    let style = ripple.style();
    let _ = style.set_property("left", &format!("{x}px"));
    let _ = style.set_property("top", &format!("{y}px"));

    if host.append_child(&ripple).is_ok() {
        dom::after(RIPPLE_LIFETIME_MS, move || ripple.remove());
    }
}
