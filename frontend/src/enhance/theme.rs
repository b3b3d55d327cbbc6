use blogsite_shared::{
    theme::{follows_system, resolve_theme, THEME_STORAGE_KEY},
    Theme,
};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement, MediaQueryListEvent, Storage};

use crate::{config, dom};

fn storage() -> Option<Storage> {
    dom::window()?.local_storage().ok().flatten()
}

fn saved_theme() -> Option<String> {
    storage()?.get_item(THEME_STORAGE_KEY).ok().flatten()
}

fn persist(theme: Theme) {
    let Some(storage) = storage() else {
        log::warn!("local storage unavailable; theme choice not persisted");
        return;
    };
    if let Err(err) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
        log::warn!("failed to persist theme: {err:?}");
    }
}

fn toggle() -> Option<HtmlInputElement> {
    dom::by_id(config::DARK_MODE_TOGGLE_ID)?.dyn_into::<HtmlInputElement>().ok()
}

fn apply(theme: Theme) {
    if let Some(body) = dom::body() {
        dom::set_class(&body, config::DARK_MODE_CLASS, theme.is_dark());
    }
    if let Some(toggle) = toggle() {
        toggle.set_checked(theme.is_dark());
    }
}

/// Apply the saved (or system) theme and wire the toggle.
pub(crate) fn init() {
    let Some(window) = dom::window() else {
        return;
    };
    let scheme = window.match_media(config::DARK_SCHEME_QUERY).ok().flatten();
    let system_dark = scheme.as_ref().is_some_and(|query| query.matches());
    apply(resolve_theme(saved_theme().as_deref(), system_dark));

    if let Some(toggle) = toggle() {
        let input = toggle.clone();
        dom::listen(&toggle, "change", move |_: Event| {
            let theme = Theme::from_dark(input.checked());
            apply(theme);
            persist(theme);
        });
    }

    if let Some(scheme) = scheme {
        dom::listen(&scheme, "change", |event: MediaQueryListEvent| {
            if follows_system(saved_theme().as_deref()) {
                apply(Theme::from_dark(event.matches()));
            }
        });
    }
}
