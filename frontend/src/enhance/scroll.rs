use blogsite_shared::layout::{anchor_scroll_top, back_to_top_visible, should_reveal, stagger_delay_ms};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};

use crate::{config, dom};

pub(crate) fn init() {
    init_reveal();
    init_stat_cards();
    init_back_to_top();
    init_anchor_links();
}

fn smooth_scroll_to(top: f64) {
    if let Some(window) = dom::window() {
        let options = ScrollToOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_top(top);
        options.set_left(0.0);

        window.scroll_with_scroll_to_options(&options);
    }
}

fn reveal_in_view(elements: &[Element]) {
    let Some(viewport) = dom::window()
        .and_then(|win| win.inner_height().ok())
        .and_then(|height| height.as_f64())
    else {
        return;
    };
    for element in elements {
        if element.class_list().contains(config::REVEALED_CLASS) {
            continue;
        }
        if should_reveal(element.get_bounding_client_rect().top(), viewport) {
            dom::add_class(element, config::REVEALED_CLASS);
        }
    }
}

fn init_reveal() {
    let elements = dom::select_all(config::REVEAL_SELECTOR);
    let Some(window) = dom::window() else {
        return;
    };
    if elements.is_empty() {
        return;
    }

    reveal_in_view(&elements);
    dom::listen(&window, "scroll", move |_: Event| reveal_in_view(&elements));
}

fn init_stat_cards() {
    for (index, card) in dom::select_all(config::STAT_CARD_SELECTOR).into_iter().enumerate() {
        dom::after(stagger_delay_ms(index), move || dom::add_class(&card, config::REVEALED_CLASS));
    }
}

fn init_back_to_top() {
    let (Some(button), Some(window)) = (dom::by_id(config::BACK_TO_TOP_ID), dom::window()) else {
        return;
    };

    {
        let button = button.clone();
        let win = window.clone();
        dom::listen(&window, "scroll", move |_: Event| {
            let scroll_y = win.scroll_y().unwrap_or(0.0);
            dom::set_class(&button, config::SHOW_CLASS, back_to_top_visible(scroll_y));
        });
    }

    dom::listen(&button, "click", |event: MouseEvent| {
        event.prevent_default();
        smooth_scroll_to(0.0);
    });
}

/// In-page links scroll smoothly and stop short of the fixed header.
fn init_anchor_links() {
    for link in dom::select_all(config::ANCHOR_LINK_SELECTOR) {
        let anchor = link.clone();
        dom::listen(&link, "click", move |event: MouseEvent| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(target) = href
                .strip_prefix('#')
                .and_then(dom::by_id)
                .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            event.prevent_default();
            smooth_scroll_to(anchor_scroll_top(f64::from(target.offset_top())));
        });
    }
}
