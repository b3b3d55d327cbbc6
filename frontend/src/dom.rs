//! Thin helpers over `web_sys` shared by the enhancers.

use blogsite_shared::layout::Rect;
use gloo_timers::callback::Timeout;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

pub(crate) fn window() -> Option<Window> {
    web_sys::window()
}

pub(crate) fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

pub(crate) fn body() -> Option<HtmlElement> {
    document().and_then(|doc| doc.body())
}

fn elements(list: Option<NodeList>) -> Vec<Element> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Every element in the document matching `selector`.
pub(crate) fn select_all(selector: &str) -> Vec<Element> {
    elements(document().and_then(|doc| doc.query_selector_all(selector).ok()))
}

/// Every descendant of `root` matching `selector`.
pub(crate) fn select_all_in(root: &Element, selector: &str) -> Vec<Element> {
    elements(root.query_selector_all(selector).ok())
}

pub(crate) fn select_one(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub(crate) fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Bind `handler` to `event` on `target` for the life of the page.
///
/// Events that are not an `E` (which the browser never sends for the names we
/// use) are skipped.
pub(crate) fn listen<E, F>(target: &EventTarget, event: &str, mut handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(move |raw: Event| {
        if let Ok(event) = raw.dyn_into::<E>() {
            handler(event);
        }
    }) as Box<dyn FnMut(Event)>);

    if let Err(err) =
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("failed to bind `{event}` listener: {err:?}");
    }
    closure.forget();
}

/// Run `f` once after `millis`, detached from any owner.
pub(crate) fn after(millis: u32, f: impl FnOnce() + 'static) {
    Timeout::new(millis, f).forget();
}

pub(crate) fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

pub(crate) fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

/// Set or clear `class`; returns the resulting state.
pub(crate) fn set_class(element: &Element, class: &str, on: bool) -> bool {
    element.class_list().toggle_with_force(class, on).unwrap_or(on)
}

/// Flip `class`; returns whether it is now present.
pub(crate) fn toggle_class(element: &Element, class: &str) -> bool {
    element.class_list().toggle(class).unwrap_or(false)
}

pub(crate) fn bounding_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

/// The event's target as an element, if it is one.
pub(crate) fn target_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}
