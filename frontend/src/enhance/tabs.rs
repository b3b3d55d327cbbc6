use blogsite_shared::layout::tab_pane_id;
use web_sys::{Element, MouseEvent};

use crate::{config, dom};

pub(crate) fn init() {
    for button in dom::select_all(config::TAB_BUTTON_SELECTOR) {
        let target = button.clone();
        dom::listen(&button, "click", move |_: MouseEvent| activate(&target));
    }
}

/// Make `button` and its pane the only active ones in their tab group.
fn activate(button: &Element) {
    let Ok(Some(group)) = button.closest(config::TAB_CONTAINER_SELECTOR) else {
        return;
    };

    for other in dom::select_all_in(&group, config::TAB_BUTTON_SELECTOR) {
        dom::remove_class(&other, config::ACTIVE_CLASS);
    }
    let panes = dom::select_all_in(&group, config::TAB_PANE_SELECTOR);
    for pane in &panes {
        dom::remove_class(pane, config::ACTIVE_CLASS);
    }

    dom::add_class(button, config::ACTIVE_CLASS);

    let Some(tab) = button.get_attribute("data-tab") else {
        return;
    };
    let pane_id = tab_pane_id(&tab);
    if let Some(pane) = panes.iter().find(|pane| pane.id() == pane_id) {
        dom::add_class(pane, config::ACTIVE_CLASS);
    }
}
