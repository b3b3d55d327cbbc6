//! AJAX forms: `<form data-ajax="true">` submits in the background and the
//! JSON reply is reconciled into notifications, inline errors and navigation.

use blogsite_shared::{
    reconcile, submission::UNEXPECTED_ERROR_MESSAGE, FlightFlag, FlightTicket, FormSurface,
    Navigation, RequestError, Severity, SubmissionRequest,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, FormData, HtmlFormElement, HtmlInputElement};

use crate::{api, callbacks, components::notification_center::notify, config, dom};

pub(crate) fn init() {
    let forms: Vec<HtmlFormElement> = dom::select_all(config::AJAX_FORM_SELECTOR)
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlFormElement>().ok())
        .collect();
    log::debug!("binding {} ajax form(s)", forms.len());
    for form in forms {
        bind(form);
    }
}

fn bind(form: HtmlFormElement) {
    let flight = FlightFlag::new();
    let target = form.clone();
    dom::listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        match flight.try_begin() {
            Some(ticket) => submit(&target, ticket),
            None => log::debug!("submission already in flight; ignoring repeat submit"),
        }
    });
}

fn submit(form: &HtmlFormElement, ticket: FlightTicket) {
    let request = match build_request(form) {
        Ok(request) => request,
        Err(err) => {
            log::error!("cannot submit form: {err}");
            notify(UNEXPECTED_ERROR_MESSAGE, Severity::Error);
            return;
        },
    };
    let callback_name = form
        .get_attribute(config::SUCCESS_CALLBACK_ATTR)
        .filter(|name| !name.trim().is_empty());
    let mut surface = DomForm::enter_loading(form.clone());

    spawn_local(async move {
        let reply = api::submit_form(request).await;
        let callback = callback_name.as_deref().and_then(callbacks::lookup);
        let outcome = reconcile(&mut surface, reply, callback.as_ref());
        log::debug!("form reconciled: {outcome:?}");
        drop(ticket);
    });
}

fn build_request(form: &HtmlFormElement) -> Result<SubmissionRequest<FormData>, RequestError> {
    let page_url = dom::window()
        .and_then(|win| win.location().href().ok())
        .ok_or_else(|| RequestError::Transport("no window location".to_string()))?;
    let body = FormData::new_with_form(form)
        .map_err(|e| RequestError::Transport(format!("{:?}", e)))?;
    let action = form.get_attribute("action");
    let method = form.get_attribute("method");

    let request = SubmissionRequest::new(&page_url, action.as_deref(), method.as_deref(), body)?;
    if request.method().carries_body() {
        return Ok(request);
    }
    let pairs = text_fields(request.body());
    Ok(request.with_query(pairs))
}

/// `(name, value)` for every non-file entry, in form order.
fn text_fields(data: &FormData) -> Vec<(String, String)> {
    let Ok(Some(entries)) = js_sys::try_iter(data) else {
        return Vec::new();
    };
    entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let pair = entry.dyn_into::<js_sys::Array>().ok()?;
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        })
        .collect()
}

/// The submit control and the label it had before loading started.
struct SubmitControl {
    element: Element,
    original_label: String,
}

impl SubmitControl {
    fn find(form: &HtmlFormElement) -> Option<Self> {
        let element = form.query_selector(config::SUBMIT_SELECTOR).ok().flatten()?;
        let original_label = element
            .get_attribute(config::ORIGINAL_TEXT_ATTR)
            .unwrap_or_else(|| Self::label(&element));
        Some(Self {
            element,
            original_label,
        })
    }

    fn as_input(element: &Element) -> Option<&HtmlInputElement> {
        element.dyn_ref::<HtmlInputElement>()
    }

    fn label(element: &Element) -> String {
        match Self::as_input(element) {
            Some(input) => input.value(),
            None => element.inner_html(),
        }
    }

    fn set_busy(&self) {
        let _ = self.element.set_attribute("disabled", "");
        match Self::as_input(&self.element) {
            Some(input) => input.set_value(config::BUSY_LABEL_TEXT),
            None => self.element.set_inner_html(config::BUSY_LABEL_HTML),
        }
    }

    fn restore(&self) {
        let _ = self.element.remove_attribute("disabled");
        match Self::as_input(&self.element) {
            Some(input) => input.set_value(&self.original_label),
            None => self.element.set_inner_html(&self.original_label),
        }
    }
}

/// [`FormSurface`] over a live form element.
struct DomForm {
    form: HtmlFormElement,
    submit: Option<SubmitControl>,
}

impl DomForm {
    fn enter_loading(form: HtmlFormElement) -> Self {
        dom::add_class(&form, config::LOADING_CLASS);
        let submit = SubmitControl::find(&form);
        if let Some(control) = &submit {
            control.set_busy();
        }
        Self {
            form,
            submit,
        }
    }

    /// Input named `field`. Names are compared directly instead of being
    /// spliced into a selector.
    fn input_named(&self, field: &str) -> Option<Element> {
        dom::select_all_in(&self.form, "[name]")
            .into_iter()
            .find(|element| element.get_attribute("name").as_deref() == Some(field))
    }
}

impl FormSurface for DomForm {
    fn finish_loading(&mut self) {
        dom::remove_class(&self.form, config::LOADING_CLASS);
        if let Some(control) = &self.submit {
            control.restore();
        }
    }

    fn clear_field_errors(&mut self) {
        for feedback in dom::select_all_in(&self.form, &format!(".{}", config::FEEDBACK_CLASS)) {
            feedback.remove();
        }
        for input in dom::select_all_in(&self.form, &format!(".{}", config::INVALID_CLASS)) {
            dom::remove_class(&input, config::INVALID_CLASS);
        }
    }

    fn mark_field_error(&mut self, field: &str, message: &str) -> bool {
        let Some(input) = self.input_named(field) else {
            return false;
        };
        dom::add_class(&input, config::INVALID_CLASS);

        if let Some(existing) = input.next_element_sibling() {
            if existing.class_list().contains(config::FEEDBACK_CLASS) {
                existing.remove();
            }
        }

        let Some(feedback) = dom::document().and_then(|doc| doc.create_element("div").ok()) else {
            return true;
        };
        feedback.set_class_name(config::FEEDBACK_CLASS);
        feedback.set_text_content(Some(message));
        if let Some(parent) = input.parent_node() {
            let _ = parent.insert_before(&feedback, input.next_sibling().as_ref());
        }
        true
    }

    fn reset_fields(&mut self) {
        self.form.reset();
    }

    fn notify(&mut self, severity: Severity, message: &str) {
        notify(message, severity);
    }

    fn navigate(&mut self, navigation: &Navigation) {
        let Some(location) = dom::window().map(|win| win.location()) else {
            return;
        };
        let result = match navigation {
            Navigation::Redirect(target) => location.set_href(target),
            Navigation::Reload => location.reload(),
            Navigation::Stay => Ok(()),
        };
        if let Err(err) = result {
            log::error!("navigation failed: {err:?}");
        }
    }
}
