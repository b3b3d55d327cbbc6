//! Geometry and thresholds behind the scroll, tooltip and ripple effects.

/// Scroll depth (px) past which the back-to-top button shows.
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;
/// An element reveals once its top is above `viewport_height / this`.
pub const REVEAL_VIEWPORT_DIVISOR: f64 = 1.2;
/// Fixed header height kept clear when jumping to an in-page anchor.
pub const ANCHOR_SCROLL_OFFSET: f64 = 70.0;
/// Gap (px) between a tooltip and its trigger.
pub const TOOLTIP_GAP: f64 = 10.0;
/// Tooltip fade-in delay.
pub const TOOLTIP_SHOW_DELAY_MS: u32 = 10;
/// Tooltip fade-out before removal.
pub const TOOLTIP_HIDE_GRACE_MS: u32 = 300;
/// Delay between consecutive stat cards fading in.
pub const STAT_CARD_STAGGER_MS: u32 = 100;
/// Lifetime of a ripple span.
pub const RIPPLE_LIFETIME_MS: u32 = 600;

/// Viewport-relative box, as `getBoundingClientRect` reports it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

/// Whether the back-to-top button should show at `scroll_y`.
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

/// Whether an element whose top edge sits at `element_top` has scrolled far
/// enough into view to animate.
pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height / REVEAL_VIEWPORT_DIVISOR
}

/// Scroll target for an anchor at document offset `offset_top`.
pub fn anchor_scroll_top(offset_top: f64) -> f64 {
    (offset_top - ANCHOR_SCROLL_OFFSET).max(0.0)
}

/// `(left, top)` for a tooltip of the given size, centred above `trigger`.
pub fn tooltip_origin(trigger: Rect, tip_width: f64, tip_height: f64) -> (f64, f64) {
    let top = trigger.top - tip_height - TOOLTIP_GAP;
    let left = trigger.left + trigger.width / 2.0 - tip_width / 2.0;
    (left, top)
}

/// Click position relative to `target`.
pub fn ripple_offset(client_x: f64, client_y: f64, target: Rect) -> (f64, f64) {
    (client_x - target.left, client_y - target.top)
}

/// Fade-in delay of the `index`-th stat card.
pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(STAT_CARD_STAGGER_MS)
}

/// Element id of the pane belonging to tab `tab`.
pub fn tab_pane_id(tab: &str) -> String {
    format!("{tab}-tab")
}
