//! Turning a form reply into UI effects.
//!
//! The DOM side implements [`FormSurface`]; [`reconcile`] decides what to call
//! on it. Keeping the decisions here lets them run without a browser.

use serde_json::Value;

use crate::{
    callbacks::SuccessCallback,
    error::RequestError,
    notification::Severity,
    submission::{Navigation, Outcome, SubmissionResult, UNEXPECTED_ERROR_MESSAGE},
};

/// The parts of a form (plus the shared notification area and the window)
/// that a reply may touch.
pub trait FormSurface {
    /// Restore the submit control's label, re-enable it and drop the loading
    /// marker.
    fn finish_loading(&mut self);

    /// Remove inline error messages and invalid markers left by an earlier
    /// reply.
    fn clear_field_errors(&mut self);

    /// Mark the input named `field` invalid and put `message` right after it,
    /// replacing an existing message. Returns `false` when no input has that
    /// name.
    fn mark_field_error(&mut self, field: &str, message: &str) -> bool;

    /// Clear the form's fields.
    fn reset_fields(&mut self);

    /// Show a notification.
    fn notify(&mut self, severity: Severity, message: &str);

    /// Leave or reload the page. Never called with [`Navigation::Stay`].
    fn navigate(&mut self, navigation: &Navigation);
}

/// What [`reconcile`] ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciled {
    /// The server accepted the submission.
    Accepted,
    /// The server rejected it; `unmatched` lists error fields that named no
    /// input.
    Rejected {
        /// Field names from `errors` without a matching input.
        unmatched: Vec<String>,
    },
    /// No usable reply arrived.
    Failed,
}

/// Apply a reply (or the failure to get one) to `surface`.
///
/// The loading state is always left first, whatever the outcome.
pub fn reconcile<S>(
    surface: &mut S,
    reply: Result<Value, RequestError>,
    success_callback: Option<&SuccessCallback>,
) -> Reconciled
where
    S: FormSurface + ?Sized,
{
    surface.finish_loading();

    let payload = match reply {
        Ok(payload) => payload,
        Err(err) => {
            tracing::error!("form submission failed: {err}");
            surface.notify(Severity::Error, UNEXPECTED_ERROR_MESSAGE);
            return Reconciled::Failed;
        },
    };
    let result = SubmissionResult::from_value(&payload);

    surface.clear_field_errors();

    match result.outcome() {
        Outcome::Accepted {
            message,
            reset_form,
            navigation,
        } => {
            surface.notify(Severity::Success, &message);
            if reset_form {
                surface.reset_fields();
            }
            if let Some(callback) = success_callback {
                callback(&payload);
            }
            if navigation != Navigation::Stay {
                surface.navigate(&navigation);
            }
            Reconciled::Accepted
        },
        Outcome::Rejected {
            message,
            field_errors,
        } => {
            surface.notify(Severity::Error, &message);
            let unmatched: Vec<String> = field_errors
                .into_iter()
                .filter(|(field, text)| !surface.mark_field_error(field, text))
                .map(|(field, _)| field)
                .collect();
            if !unmatched.is_empty() {
                tracing::debug!(?unmatched, "field errors without a matching input");
            }
            Reconciled::Rejected {
                unmatched,
            }
        },
    }
}
