use blogsite_shared::{
    cookie::read_cookie,
    like::{CsrfToken, LikeOutcome, LikeRequest, LikeState},
    submission::UNEXPECTED_ERROR_MESSAGE,
    FlightFlag, Severity,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlDocument, MouseEvent};

use crate::{api, components::notification_center::notify, config, dom};

pub(crate) fn init() {
    for button in dom::select_all(config::LIKE_BUTTON_SELECTOR) {
        bind(button);
    }
}

fn csrf_token() -> Option<CsrfToken> {
    let cookies = dom::document()?.dyn_into::<HtmlDocument>().ok()?.cookie().ok()?;
    read_cookie(&cookies, config::CSRF_COOKIE).and_then(CsrfToken::new)
}

fn bind(button: Element) {
    let flight = FlightFlag::new();
    let target = button.clone();
    dom::listen(&button, "click", move |event: MouseEvent| {
        event.prevent_default();
        let Some(post_id) = target.get_attribute("data-post-id") else {
            return;
        };
        let Some(ticket) = flight.try_begin() else {
            log::debug!("like for post {post_id} already in flight");
            return;
        };

        let request = LikeRequest::new(config::LIKE_URL_PREFIX, &post_id, csrf_token());
        let button = target.clone();
        spawn_local(async move {
            match api::toggle_like(&request).await {
                Ok(response) => match response.outcome() {
                    LikeOutcome::Updated(state) => apply(&button, state),
                    LikeOutcome::Rejected(message) => notify(message, Severity::Error),
                },
                Err(err) => {
                    log::error!("like request for post {post_id} failed: {err}");
                    notify(UNEXPECTED_ERROR_MESSAGE, Severity::Error);
                },
            }
            drop(ticket);
        });
    });
}

/// Show the server's view of the like: liked class, icon style and count.
fn apply(button: &Element, state: LikeState) {
    dom::set_class(button, config::LIKED_CLASS, state.liked);

    if let Some(count) = state.likes_count {
        if let Ok(Some(label)) = button.query_selector(config::LIKE_COUNT_SELECTOR) {
            label.set_text_content(Some(&count.to_string()));
        }
    }

    if let Ok(Some(icon)) = button.query_selector("i") {
        dom::remove_class(&icon, "fas");
        dom::remove_class(&icon, "far");
        dom::add_class(&icon, state.icon_style());
    }
}
