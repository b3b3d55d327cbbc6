use blogsite_shared::reading::reading_time_label;

use crate::{config, dom};

/// Fill `.reading-time` with an estimate for `.post-content`.
pub(crate) fn init() {
    let (Some(content), Some(label)) = (
        dom::select_one(config::POST_CONTENT_SELECTOR),
        dom::select_one(config::READING_TIME_SELECTOR),
    ) else {
        return;
    };
    let text = content.text_content().unwrap_or_default();
    label.set_text_content(Some(&reading_time_label(&text)));
}
