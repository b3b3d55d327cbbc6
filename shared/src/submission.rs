//! Wire types for AJAX form submission: the outgoing request and the decoded
//! JSON reply.

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::error::RequestError;

/// Header the server branches on to tell programmatic requests from full
/// page loads.
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
/// Value sent in [`REQUESTED_WITH_HEADER`].
pub const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";

/// Shown on success when the server sends no message.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Success!";
/// Shown on `success: false` when the server sends no message.
pub const DEFAULT_FAILURE_MESSAGE: &str = "An error occurred.";
/// Shown on transport failure or an unreadable reply.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// HTTP method taken from a form's `method` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpMethod {
    /// `GET`, fields go into the query string.
    Get,
    /// `POST`, the default.
    #[default]
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
}

/// Error for method names we do not send.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported form method `{0}`")]
pub struct UnknownMethod(pub String);

impl FromStr for HttpMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            _ => Err(UnknownMethod(s.to_string())),
        }
    }
}

impl HttpMethod {
    /// Resolve the `method` attribute. Missing or blank means POST; an
    /// unrecognised value also falls back to POST. `HEAD` is not accepted
    /// since its reply has no body to read.
    pub fn from_attribute(attr: Option<&str>) -> Self {
        let Some(raw) = attr.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::Post;
        };
        raw.parse().unwrap_or_else(|err: UnknownMethod| {
            tracing::warn!("{err}; submitting with POST");
            Self::Post
        })
    }

    /// Canonical uppercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Whether form fields travel in the request body.
    pub fn carries_body(self) -> bool {
        self != Self::Get
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One submission, frozen at the moment the form was submitted.
///
/// `B` is the body representation: `web_sys::FormData` in the browser, plain
/// pairs anywhere else.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRequest<B> {
    url: Url,
    method: HttpMethod,
    body: B,
}

impl<B> SubmissionRequest<B> {
    /// Resolve `action` against `page_url` (an empty or missing action targets
    /// the page itself) and pick the method from the `method` attribute.
    pub fn new(
        page_url: &str,
        action: Option<&str>,
        method: Option<&str>,
        body: B,
    ) -> Result<Self, RequestError> {
        let page = Url::parse(page_url).map_err(|err| RequestError::invalid_target(page_url, err))?;
        let mut url = match action.map(str::trim).filter(|action| !action.is_empty()) {
            Some(action) => page
                .join(action)
                .map_err(|err| RequestError::invalid_target(action, err))?,
            None => page,
        };
        url.set_fragment(None);

        Ok(Self {
            url,
            method: HttpMethod::from_attribute(method),
            body,
        })
    }

    /// Replace the query string with `pairs`, the way a browser encodes a GET
    /// form. Has no effect for methods that carry a body.
    pub fn with_query<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        if self.method.carries_body() {
            return self;
        }
        self.url.set_query(None);
        self.url.query_pairs_mut().extend_pairs(pairs);
        if self.url.query() == Some("") {
            self.url.set_query(None);
        }
        self
    }

    /// Absolute target URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// HTTP method.
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Borrow the body.
    pub fn body(&self) -> &B {
        &self.body
    }

    /// Take the body, e.g. to hand it to the transport.
    pub fn into_body(self) -> B {
        self.body
    }

    /// Headers every submission carries.
    pub fn headers(&self) -> [(&'static str, &'static str); 1] {
        [(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE)]
    }
}

/// Decoded JSON reply of an AJAX form.
///
/// Keys are read the way a page script would read them: flags by
/// truthiness, text only when it is a string. A reply without a truthy
/// `success` is a failure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionResult {
    /// Whether the server accepted the submission.
    pub success: bool,
    /// Human-readable outcome.
    pub message: Option<String>,
    /// Clear the fields after a success. Only an explicit `false` keeps them.
    pub reset_form: bool,
    /// Navigate here after a success.
    pub redirect: Option<String>,
    /// Reload the page after a success.
    pub refresh: bool,
    /// Field name to error text, in field-name order.
    pub errors: BTreeMap<String, String>,
}

/// What to do with the page after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Leave the page as it is.
    Stay,
    /// Go to this URL.
    Redirect(String),
    /// Reload the current page.
    Reload,
}

/// [`SubmissionResult`] reduced to the decisions the UI has to make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `success: true`.
    Accepted {
        /// Message for the success notification.
        message: String,
        /// Clear the form fields.
        reset_form: bool,
        /// Follow-up navigation; a redirect wins over a refresh.
        navigation: Navigation,
    },
    /// Anything else.
    Rejected {
        /// Message for the error notification.
        message: String,
        /// `(field name, message)` pairs, in field-name order.
        field_errors: Vec<(String, String)>,
    },
}

impl SubmissionResult {
    /// Decode a parsed JSON body. Never fails: non-object JSON decodes to
    /// an empty result, which is a failure, and keys of an unexpected type
    /// are read leniently or skipped.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        let flag = |key: &str| object.get(key).is_some_and(is_truthy);
        let text = |key: &str| {
            object
                .get(key)
                .and_then(Value::as_str)
                .filter(|text| !text.is_empty())
                .map(str::to_string)
        };

        let errors = object
            .get("errors")
            .and_then(Value::as_object)
            .into_iter()
            .flatten()
            .filter_map(|(field, message)| Some((field.clone(), error_text(message)?)))
            .collect();

        Self {
            success: flag("success"),
            message: text("message"),
            reset_form: object.get("reset_form") != Some(&Value::Bool(false)),
            redirect: text("redirect"),
            refresh: flag("refresh"),
            errors,
        }
    }

    /// Whether the server reported success.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Reduce to an [`Outcome`].
    pub fn outcome(&self) -> Outcome {
        let message = self.message.clone();

        if self.success {
            let navigation = match &self.redirect {
                Some(target) => Navigation::Redirect(target.clone()),
                None if self.refresh => Navigation::Reload,
                None => Navigation::Stay,
            };
            return Outcome::Accepted {
                message: message.unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
                reset_form: self.reset_form,
                navigation,
            };
        }

        Outcome::Rejected {
            message: message.unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
            field_errors: self.errors.clone().into_iter().collect(),
        }
    }
}

/// JavaScript truthiness of a JSON value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text for one entry of `errors`: a string, a list joined with spaces, or
/// whatever the value stringifies to. Django's `get_json_data()` items
/// (`{"message": ..., "code": ...}`) contribute their `message`. `null` and
/// empty values yield nothing.
fn error_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .filter_map(error_text)
            .collect::<Vec<_>>()
            .join(" "),
        Value::Object(object) => match object.get("message").and_then(Value::as_str) {
            Some(message) => message.to_string(),
            None => value.to_string(),
        },
        Value::Bool(_) | Value::Number(_) => value.to_string(),
    };
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn outcome(value: Value) -> Outcome {
        SubmissionResult::from_value(&value).outcome()
    }

    #[test]
    fn method_defaults_to_post() {
        assert_eq!(HttpMethod::from_attribute(None), HttpMethod::Post);
        assert_eq!(HttpMethod::from_attribute(Some("  ")), HttpMethod::Post);
        assert_eq!(HttpMethod::from_attribute(Some("get")), HttpMethod::Get);
        assert_eq!(HttpMethod::from_attribute(Some("dialog")), HttpMethod::Post);
        assert_eq!(HttpMethod::from_attribute(Some("head")), HttpMethod::Post);
    }

    #[test]
    fn missing_action_targets_the_page() {
        let request =
            SubmissionRequest::new("https://blog.test/posts/5/#comments", None, None, ()).unwrap();
        assert_eq!(request.url().as_str(), "https://blog.test/posts/5/");
        assert_eq!(request.method(), HttpMethod::Post);
    }

    #[test]
    fn relative_action_resolves_against_page() {
        let request = SubmissionRequest::new(
            "https://blog.test/posts/5/",
            Some("comment/"),
            Some("post"),
            (),
        )
        .unwrap();
        assert_eq!(request.url().as_str(), "https://blog.test/posts/5/comment/");

        let request =
            SubmissionRequest::new("https://blog.test/posts/5/", Some("/subscribe/"), None, ())
                .unwrap();
        assert_eq!(request.url().as_str(), "https://blog.test/subscribe/");
    }

    #[test]
    fn unparseable_page_url_is_an_invalid_target() {
        let err = SubmissionRequest::new("not a url", None, None, ()).unwrap_err();
        assert!(matches!(err, RequestError::InvalidTarget { .. }));
    }

    #[test]
    fn get_forms_move_fields_into_the_query() {
        let request =
            SubmissionRequest::new("https://blog.test/search/?page=2", None, Some("GET"), ())
                .unwrap()
                .with_query([("q", "rust wasm"), ("tag", "yew")]);
        assert_eq!(request.url().as_str(), "https://blog.test/search/?q=rust+wasm&tag=yew");
    }

    #[test]
    fn post_forms_keep_their_query() {
        let request = SubmissionRequest::new("https://blog.test/?next=/", None, None, ())
            .unwrap()
            .with_query([("q", "ignored")]);
        assert_eq!(request.url().query(), Some("next=/"));
    }

    #[test]
    fn requests_are_tagged_as_programmatic() {
        let request = SubmissionRequest::new("https://blog.test/", None, None, ()).unwrap();
        assert_eq!(request.headers(), [("X-Requested-With", "XMLHttpRequest")]);
    }

    #[test]
    fn success_uses_server_message_and_resets_by_default() {
        assert_eq!(
            outcome(json!({ "success": true, "message": "Saved" })),
            Outcome::Accepted {
                message: "Saved".into(),
                reset_form: true,
                navigation: Navigation::Stay,
            }
        );
    }

    #[test]
    fn success_can_opt_out_of_reset() {
        let Outcome::Accepted { reset_form, message, .. } =
            outcome(json!({ "success": true, "reset_form": false, "message": "" }))
        else {
            panic!("expected success");
        };
        assert!(!reset_form);
        assert_eq!(message, DEFAULT_SUCCESS_MESSAGE);
    }

    #[test]
    fn redirect_wins_over_refresh() {
        let Outcome::Accepted { navigation, .. } =
            outcome(json!({ "success": true, "redirect": "/posts/5/", "refresh": true }))
        else {
            panic!("expected success");
        };
        assert_eq!(navigation, Navigation::Redirect("/posts/5/".into()));

        let Outcome::Accepted { navigation, .. } =
            outcome(json!({ "success": true, "redirect": "", "refresh": true }))
        else {
            panic!("expected success");
        };
        assert_eq!(navigation, Navigation::Reload);
    }

    #[test]
    fn missing_success_key_is_a_failure() {
        assert_eq!(
            outcome(json!({ "message": "Saved" })),
            Outcome::Rejected {
                message: "Saved".into(),
                field_errors: vec![],
            }
        );
    }

    #[test]
    fn non_object_json_is_a_failure() {
        assert!(matches!(outcome(json!([true])), Outcome::Rejected { .. }));
        assert!(matches!(outcome(json!("ok")), Outcome::Rejected { .. }));
    }

    #[test]
    fn field_errors_accept_strings_and_lists() {
        let Outcome::Rejected { message, field_errors } = outcome(json!({
            "success": false,
            "errors": {
                "email": "Invalid address",
                "title": ["Too short.", "Required."],
            }
        })) else {
            panic!("expected failure");
        };
        assert_eq!(message, DEFAULT_FAILURE_MESSAGE);
        assert_eq!(
            field_errors,
            vec![
                ("email".to_string(), "Invalid address".to_string()),
                ("title".to_string(), "Too short. Required.".to_string()),
            ]
        );
    }

    #[test]
    fn null_keys_are_tolerated() {
        assert!(matches!(
            outcome(json!({ "success": true, "message": null, "errors": null, "refresh": null })),
            Outcome::Accepted { .. }
        ));
    }

    #[test]
    fn flags_follow_truthiness() {
        let Outcome::Accepted { navigation, reset_form, message } =
            outcome(json!({ "success": 1, "message": "Saved", "refresh": 1 }))
        else {
            panic!("expected success");
        };
        assert_eq!(message, "Saved");
        assert!(reset_form);
        assert_eq!(navigation, Navigation::Reload);

        assert!(matches!(outcome(json!({ "success": "yes" })), Outcome::Accepted { .. }));
        assert!(matches!(outcome(json!({ "success": 0 })), Outcome::Rejected { .. }));
        assert!(matches!(outcome(json!({ "success": "" })), Outcome::Rejected { .. }));
    }

    #[test]
    fn only_explicit_false_keeps_fields() {
        let reset = |value: Value| match outcome(value) {
            Outcome::Accepted { reset_form, .. } => reset_form,
            Outcome::Rejected { .. } => panic!("expected success"),
        };
        assert!(reset(json!({ "success": true, "reset_form": 0 })));
        assert!(reset(json!({ "success": true, "reset_form": null })));
        assert!(!reset(json!({ "success": true, "reset_form": false })));
    }

    #[test]
    fn non_string_text_keys_are_ignored() {
        assert_eq!(
            outcome(json!({ "success": true, "message": 42, "redirect": ["/x/"] })),
            Outcome::Accepted {
                message: DEFAULT_SUCCESS_MESSAGE.into(),
                reset_form: true,
                navigation: Navigation::Stay,
            }
        );
    }

    #[test]
    fn structured_field_errors_are_flattened() {
        let Outcome::Rejected { message, field_errors } = outcome(json!({
            "success": false,
            "message": "Fix the form",
            "errors": {
                "email": "Invalid address",
                "title": [{ "message": "Too short.", "code": "min_length" }],
                "age": 7,
                "slug": null,
            }
        })) else {
            panic!("expected failure");
        };
        assert_eq!(message, "Fix the form");
        assert_eq!(
            field_errors,
            vec![
                ("age".to_string(), "7".to_string()),
                ("email".to_string(), "Invalid address".to_string()),
                ("title".to_string(), "Too short.".to_string()),
            ]
        );
    }
}
