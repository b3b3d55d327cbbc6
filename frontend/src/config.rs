//! Selectors, class names and endpoints the enhancements bind to.
//!
//! These mirror the markup the server templates emit. The like endpoint and
//! the CSRF cookie name can be overridden at build time.

/// Prefix of the like endpoint; the post id and a trailing slash are appended.
pub const LIKE_URL_PREFIX: &str = match option_env!("BLOGSITE_LIKE_URL_PREFIX") {
    Some(prefix) => prefix,
    None => "/like-post/",
};

/// Cookie the CSRF token is read from.
pub const CSRF_COOKIE: &str = match option_env!("BLOGSITE_CSRF_COOKIE") {
    Some(name) => name,
    None => "csrftoken",
};

// Forms
pub(crate) const AJAX_FORM_SELECTOR: &str = "form[data-ajax=\"true\"]";
pub(crate) const SUCCESS_CALLBACK_ATTR: &str = "data-success-callback";
pub(crate) const ORIGINAL_TEXT_ATTR: &str = "data-original-text";
pub(crate) const SUBMIT_SELECTOR: &str = "[type=\"submit\"]";
pub(crate) const LOADING_CLASS: &str = "loading";
pub(crate) const INVALID_CLASS: &str = "is-invalid";
pub(crate) const FEEDBACK_CLASS: &str = "invalid-feedback";
pub(crate) const BUSY_LABEL_HTML: &str = "<i class=\"fas fa-spinner fa-spin\"></i> Processing...";
pub(crate) const BUSY_LABEL_TEXT: &str = "Processing...";

// Notifications
pub(crate) const NOTIFICATIONS_CONTAINER_CLASS: &str = "notifications-container";

// Like button
pub(crate) const LIKE_BUTTON_SELECTOR: &str = ".like-btn[data-post-id]";
pub(crate) const LIKE_COUNT_SELECTOR: &str = ".like-count";
pub(crate) const LIKED_CLASS: &str = "liked";

// Theme
pub(crate) const DARK_MODE_TOGGLE_ID: &str = "dark-mode-toggle";
pub(crate) const DARK_MODE_CLASS: &str = "dark-mode";
pub(crate) const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// Navigation
pub(crate) const MOBILE_MENU_TOGGLE_ID: &str = "mobile-menu-toggle";
pub(crate) const MOBILE_MENU_ID: &str = "mobile-menu";
pub(crate) const MENU_OPEN_CLASS: &str = "menu-open";
pub(crate) const SHOW_CLASS: &str = "show";
pub(crate) const DROPDOWN_TOGGLE_SELECTOR: &str = ".dropdown-toggle";
pub(crate) const OPEN_DROPDOWN_SELECTOR: &str = ".dropdown-menu.show";
pub(crate) const DROPDOWN_SELECTOR: &str = ".dropdown";
pub(crate) const CONFIRM_DELETE_SELECTOR: &str = "[data-confirm-delete]";

// Tabs
pub(crate) const TAB_BUTTON_SELECTOR: &str = ".tab-btn";
pub(crate) const TAB_PANE_SELECTOR: &str = ".tab-pane";
pub(crate) const TAB_CONTAINER_SELECTOR: &str = ".profile-tabs, .dashboard-content";
pub(crate) const ACTIVE_CLASS: &str = "active";

// Scroll effects
pub(crate) const REVEAL_SELECTOR: &str = ".animate-on-scroll";
pub(crate) const REVEALED_CLASS: &str = "animate-fadeIn";
pub(crate) const STAT_CARD_SELECTOR: &str = ".stat-card";
pub(crate) const BACK_TO_TOP_ID: &str = "back-to-top";
pub(crate) const ANCHOR_LINK_SELECTOR: &str = "a[href^=\"#\"]:not([href=\"#\"])";

// Misc
pub(crate) const TOOLTIP_SELECTOR: &str = "[data-tooltip]";
pub(crate) const RIPPLE_SELECTOR: &str = ".btn";
pub(crate) const POST_CONTENT_SELECTOR: &str = ".post-content";
pub(crate) const READING_TIME_SELECTOR: &str = ".reading-time";
