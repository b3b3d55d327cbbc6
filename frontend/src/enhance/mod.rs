// Progressive enhancements bound to server-rendered markup.

pub mod forms;
pub mod like;
pub mod nav;
pub mod reading_time;
pub mod ripple;
pub mod scroll;
pub mod tabs;
pub mod theme;
pub mod tooltip;

/// Bind every enhancement. Each one is a no-op on pages without its markup.
pub(crate) fn enhance_page() {
    theme::init();
    nav::init();
    tabs::init();
    tooltip::init();
    scroll::init();
    ripple::init();
    forms::init();
    like::init();
    reading_time::init();
    log::debug!("page enhancements bound");
}
