use std::{cell::RefCell, rc::Rc};

use blogsite_shared::layout::{tooltip_origin, TOOLTIP_HIDE_GRACE_MS, TOOLTIP_SHOW_DELAY_MS};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use crate::{config, dom};

pub(crate) fn init() {
    for trigger in dom::select_all(config::TOOLTIP_SELECTOR) {
        bind(trigger);
    }
}

fn bind(trigger: Element) {
    // Tooltip currently attached to this trigger.
    let active: Rc<RefCell<Option<HtmlElement>>> = Rc::default();

    {
        let active = Rc::clone(&active);
        let target = trigger.clone();
        dom::listen(&trigger, "mouseenter", move |_: MouseEvent| {
            let Some(text) = target.get_attribute("data-tooltip") else {
                return;
            };
            if let Some(stale) = active.borrow_mut().take() {
                stale.remove();
            }
            if let Some(tip) = show(&target, &text) {
                *active.borrow_mut() = Some(tip);
            }
        });
    }

    dom::listen(&trigger, "mouseleave", move |_: MouseEvent| {
        if let Some(tip) = active.borrow_mut().take() {
            dom::remove_class(&tip, config::SHOW_CLASS);
            dom::after(TOOLTIP_HIDE_GRACE_MS, move || tip.remove());
        }
    });
}

fn show(trigger: &Element, text: &str) -> Option<HtmlElement> {
    let tip = dom::document()?
        .create_element("div")
        .ok()?
        .dyn_into::<HtmlElement>()
        .ok()?;
    tip.set_class_name("tooltip");
    tip.set_text_content(Some(text));
    dom::body()?.append_child(&tip).ok()?;

    let (left, top) = tooltip_origin(
        dom::bounding_rect(trigger),
        f64::from(tip.offset_width()),
        f64::from(tip.offset_height()),
    );
    let style = tip.style();
    let _ = style.set_property("top", &format!("{top}px"));
    let _ = style.set_property("left", &format!("{left}px"));

    let fading_in = tip.clone();
    dom::after(TOOLTIP_SHOW_DELAY_MS, move || dom::add_class(&fading_in, config::SHOW_CLASS));
    Some(tip)
}
