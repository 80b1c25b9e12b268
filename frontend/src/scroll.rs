//! Scroll geometry for the top page.
//!
//! Everything here is a plain function of the scroll offset and element
//! geometry, so the controller only has to apply the results to the DOM.

use crate::config::PageConfig;

/// Whether the page-top button should be visible at `offset`.
pub fn page_top_visible(config: &PageConfig, offset: f64) -> bool {
    offset > config.page_top_threshold
}

/// Whether the header should be pinned at `offset`.
pub fn header_fixed(config: &PageConfig, offset: f64) -> bool {
    offset > config.header_fixed_threshold
}

/// Hero image scale for `offset`, clamped to the configured range.
pub fn hero_scale(config: &PageConfig, offset: f64) -> f64 {
    (1.0 + offset / config.hero_scale_divisor).clamp(config.hero_scale_min, config.hero_scale_max)
}

/// Inline `transform` value for a given scale.
pub fn scale_transform(scale: f64) -> String {
    format!("scale({})", scale)
}

/// Whether an element whose viewport-relative top is `rect_top` has crossed
/// the reveal line.
pub fn is_revealed(config: &PageConfig, rect_top: f64, scroll_y: f64, viewport_height: f64) -> bool {
    let element_top = rect_top + scroll_y;
    let threshold = viewport_height * config.reveal_ratio;
    scroll_y + threshold > element_top
}

/// Selector to resolve for an in-page link. `"#"` and `""` mean the page root.
pub fn anchor_target_selector(href: &str) -> &str {
    if href.is_empty() || href == "#" {
        "html"
    } else {
        href
    }
}

/// Absolute scroll position that puts the target just below the header.
pub fn anchor_destination(scroll_y: f64, target_rect_top: f64, header_height: f64) -> f64 {
    scroll_y + target_rect_top - header_height
}
