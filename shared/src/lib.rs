//! DOM-free core of the blog's client-side behaviour: wire types, the
//! notification lifecycle, form-reply reconciliation and the small helpers
//! behind the page effects. Builds natively so all of it is testable without
//! a browser.

pub mod callbacks;
pub mod cookie;
pub mod error;
pub mod flight;
pub mod layout;
pub mod like;
pub mod notification;
pub mod pipeline;
pub mod reading;
pub mod submission;
pub mod theme;

pub use callbacks::{CallbackRegistry, SuccessCallback};
pub use error::RequestError;
pub use flight::{FlightFlag, FlightTicket};
pub use notification::{Lifecycle, NotificationBoard, Severity};
pub use pipeline::{reconcile, FormSurface, Reconciled};
pub use submission::{HttpMethod, Navigation, SubmissionRequest, SubmissionResult};
pub use theme::Theme;
