use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Selectors, class names and thresholds the controller works with.
///
/// These match the markup of the top page; nothing is read at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub page_top_selector: &'static str,
    pub header_selector: &'static str,
    pub hero_image_selector: &'static str,
    pub menu_button_selector: &'static str,
    pub animated_selector: &'static str,
    pub anchor_selector: &'static str,

    pub shown_class: &'static str,
    pub header_fixed_class: &'static str,
    pub header_scrolled_class: &'static str,
    pub menu_open_class: &'static str,

    /// Page-top button is shown strictly above this offset.
    pub page_top_threshold: f64,
    /// Header is fixed strictly above this offset.
    pub header_fixed_threshold: f64,
    /// Delay before the secondary header class lands.
    pub header_scrolled_delay_ms: u32,
    /// Pixels of scroll per unit of hero scale.
    pub hero_scale_divisor: f64,
    pub hero_scale_min: f64,
    pub hero_scale_max: f64,
    /// Fraction of the viewport height used as the reveal line.
    pub reveal_ratio: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_top_selector: ".js-pagetop",
            header_selector: ".js-header",
            hero_image_selector: ".js-mainvis_image",
            menu_button_selector: ".js-menu-button",
            animated_selector: "#top .motion, #top .fade",
            anchor_selector: "a[href^=\"#\"]",

            shown_class: "is-show",
            header_fixed_class: "header-fixed",
            header_scrolled_class: "is-scrollTop",
            menu_open_class: "menu-open",

            page_top_threshold: 300.0,
            header_fixed_threshold: 50.0,
            header_scrolled_delay_ms: 300,
            hero_scale_divisor: 2000.0,
            hero_scale_min: 1.0,
            hero_scale_max: 1.3,
            reveal_ratio: 0.9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = PageConfig::default();
        assert_eq!(config.page_top_threshold, 300.0);
        assert_eq!(config.header_fixed_threshold, 50.0);
        assert_eq!(config.header_scrolled_delay_ms, 300);
        assert!(config.hero_scale_min <= config.hero_scale_max);
    }

    #[test]
    fn test_anchor_selector_matches_hash_links() {
        assert_eq!(PageConfig::default().anchor_selector, "a[href^=\"#\"]");
    }
}
