//! Form reply handling against an in-memory form.

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

    use blogsite_shared::{
        reconcile,
        submission::{DEFAULT_FAILURE_MESSAGE, UNEXPECTED_ERROR_MESSAGE},
        CallbackRegistry, FormSurface, Navigation, Reconciled, RequestError, Severity,
    };
    use serde_json::{json, Value};

    /// In-memory form: inputs by name, inline errors keyed by input, and a log
    /// of everything that reached the notification area or the window.
    #[derive(Debug, Default)]
    struct FakeForm {
        inputs: BTreeMap<String, String>,
        invalid: BTreeMap<String, Vec<String>>,
        loading: bool,
        notices: Vec<(Severity, String)>,
        navigations: Vec<Navigation>,
    }

    impl FakeForm {
        fn with_inputs(names: &[&str]) -> Self {
            Self {
                inputs: names.iter().map(|name| (name.to_string(), "typed".to_string())).collect(),
                loading: true,
                ..Self::default()
            }
        }
    }

    impl FormSurface for FakeForm {
        fn finish_loading(&mut self) {
            self.loading = false;
        }

        fn clear_field_errors(&mut self) {
            self.invalid.clear();
        }

        fn mark_field_error(&mut self, field: &str, message: &str) -> bool {
            if !self.inputs.contains_key(field) {
                return false;
            }
            let messages = self.invalid.entry(field.to_string()).or_default();
            messages.clear();
            messages.push(message.to_string());
            true
        }

        fn reset_fields(&mut self) {
            for value in self.inputs.values_mut() {
                value.clear();
            }
        }

        fn notify(&mut self, severity: Severity, message: &str) {
            self.notices.push((severity, message.to_string()));
        }

        fn navigate(&mut self, navigation: &Navigation) {
            self.navigations.push(navigation.clone());
        }
    }

    #[test]
    fn saved_reply_clears_fields_and_notifies_success() {
        let mut form = FakeForm::with_inputs(&["title", "body"]);

        let outcome = reconcile(&mut form, Ok(json!({ "success": true, "message": "Saved" })), None);

        assert_eq!(outcome, Reconciled::Accepted);
        assert!(!form.loading);
        assert!(form.inputs.values().all(String::is_empty));
        assert_eq!(form.notices, vec![(Severity::Success, "Saved".to_string())]);
        assert!(form.navigations.is_empty());
    }

    #[test]
    fn field_error_is_replaced_not_duplicated() {
        let mut form = FakeForm::with_inputs(&["email", "name"]);

        reconcile(
            &mut form,
            Ok(json!({ "success": false, "errors": { "email": "Invalid address" } })),
            None,
        );
        assert_eq!(form.invalid.get("email"), Some(&vec!["Invalid address".to_string()]));
        assert_eq!(form.notices, vec![(Severity::Error, DEFAULT_FAILURE_MESSAGE.to_string())]);

        reconcile(
            &mut form,
            Ok(json!({ "success": false, "errors": { "name": "Required." } })),
            None,
        );
        assert_eq!(form.invalid.get("email"), None);
        assert_eq!(form.invalid.get("name"), Some(&vec!["Required.".to_string()]));

        reconcile(
            &mut form,
            Ok(json!({ "success": false, "errors": { "email": "Invalid address" } })),
            None,
        );
        assert_eq!(form.invalid.get("email").map(Vec::len), Some(1));
    }

    #[test]
    fn unknown_error_fields_are_ignored() {
        let mut form = FakeForm::with_inputs(&["email"]);

        let outcome = reconcile(
            &mut form,
            Ok(json!({
                "success": false,
                "message": "Fix the form",
                "errors": { "email": "Invalid address", "captcha": "Wrong" }
            })),
            None,
        );

        assert_eq!(
            outcome,
            Reconciled::Rejected {
                unmatched: vec!["captcha".to_string()],
            }
        );
        assert_eq!(form.invalid.len(), 1);
        assert_eq!(form.notices, vec![(Severity::Error, "Fix the form".to_string())]);
    }

    #[test]
    fn redirect_navigates_without_reload() {
        let mut form = FakeForm::with_inputs(&["title"]);

        reconcile(
            &mut form,
            Ok(json!({ "success": true, "redirect": "/posts/5/", "refresh": true })),
            None,
        );

        assert_eq!(form.navigations, vec![Navigation::Redirect("/posts/5/".to_string())]);
    }

    #[test]
    fn refresh_reloads_when_no_redirect() {
        let mut form = FakeForm::with_inputs(&["title"]);

        reconcile(&mut form, Ok(json!({ "success": true, "refresh": true })), None);

        assert_eq!(form.navigations, vec![Navigation::Reload]);
    }

    #[test]
    fn transport_failure_restores_control_and_notifies_once() {
        let mut form = FakeForm::with_inputs(&["email"]);

        let outcome = reconcile(
            &mut form,
            Err(RequestError::Transport("TypeError: Failed to fetch".to_string())),
            None,
        );

        assert_eq!(outcome, Reconciled::Failed);
        assert!(!form.loading);
        assert_eq!(form.notices, vec![(Severity::Error, UNEXPECTED_ERROR_MESSAGE.to_string())]);
        assert!(form.inputs.values().all(|value| value == "typed"));
    }

    #[test]
    fn malformed_reply_is_treated_like_transport_failure() {
        let mut form = FakeForm::with_inputs(&["email"]);

        let outcome = reconcile(
            &mut form,
            Err(RequestError::Malformed("HTTP 500: unexpected token <".to_string())),
            None,
        );

        assert_eq!(outcome, Reconciled::Failed);
        assert!(!form.loading);
        assert_eq!(form.notices, vec![(Severity::Error, UNEXPECTED_ERROR_MESSAGE.to_string())]);
    }

    #[test]
    fn numeric_refresh_flag_still_reloads() {
        let mut form = FakeForm::with_inputs(&["title"]);

        let outcome = reconcile(
            &mut form,
            Ok(json!({ "success": true, "message": "Saved", "refresh": 1 })),
            None,
        );

        assert_eq!(outcome, Reconciled::Accepted);
        assert_eq!(form.notices, vec![(Severity::Success, "Saved".to_string())]);
        assert!(form.inputs.values().all(String::is_empty));
        assert_eq!(form.navigations, vec![Navigation::Reload]);
    }

    #[test]
    fn structured_field_errors_keep_message_and_annotations() {
        let mut form = FakeForm::with_inputs(&["email", "title"]);

        let outcome = reconcile(
            &mut form,
            Ok(json!({
                "success": false,
                "message": "Fix the form",
                "errors": {
                    "email": "Invalid address",
                    "title": [{ "message": "Too short.", "code": "min_length" }]
                }
            })),
            None,
        );

        assert_eq!(
            outcome,
            Reconciled::Rejected {
                unmatched: vec![],
            }
        );
        assert_eq!(form.notices, vec![(Severity::Error, "Fix the form".to_string())]);
        assert_eq!(form.invalid.get("email"), Some(&vec!["Invalid address".to_string()]));
        assert_eq!(form.invalid.get("title"), Some(&vec!["Too short.".to_string()]));
    }

    #[test]
    fn success_callback_receives_full_payload() {
        let seen: Rc<RefCell<Option<Value>>> = Rc::default();
        let mut registry = CallbackRegistry::new();
        {
            let seen = Rc::clone(&seen);
            registry.register("onSubscribed", move |payload| {
                *seen.borrow_mut() = Some(payload.clone());
            });
        }
        let payload = json!({ "success": true, "subscriber_id": 12, "reset_form": false });
        let mut form = FakeForm::with_inputs(&["email"]);

        let callback = registry.get("onSubscribed");
        reconcile(&mut form, Ok(payload.clone()), callback.as_ref());

        assert_eq!(seen.borrow().as_ref(), Some(&payload));
        assert!(form.inputs.values().all(|value| value == "typed"));
    }

    #[test]
    fn callback_is_not_run_on_failure() {
        let calls = Rc::new(RefCell::new(0));
        let mut registry = CallbackRegistry::new();
        {
            let calls = Rc::clone(&calls);
            registry.register("cb", move |_| *calls.borrow_mut() += 1);
        }
        let mut form = FakeForm::with_inputs(&[]);

        reconcile(&mut form, Ok(json!({ "success": false })), registry.get("cb").as_ref());

        assert_eq!(*calls.borrow(), 0);
    }
}
