//! The slice of the browser the controller depends on.

/// A DOM element the controller reads geometry from and writes classes to.
pub trait PageElement: Clone + 'static {
    fn add_class(&self, name: &str);
    fn remove_class(&self, name: &str);
    fn has_class(&self, name: &str) -> bool;
    fn toggle_class(&self, name: &str);
    fn set_style(&self, property: &str, value: &str);
    /// Top edge relative to the viewport (`getBoundingClientRect().top`).
    fn viewport_top(&self) -> f64;
    /// Rendered height (`offsetHeight`); 0 for non-HTML elements.
    fn height(&self) -> f64;
}

/// Window-level reads and element lookups.
pub trait Viewport: 'static {
    type Element: PageElement;

    fn scroll_y(&self) -> f64;
    fn inner_height(&self) -> f64;
    fn smooth_scroll_to(&self, top: f64);
    /// First match for `selector`. Invalid selectors resolve to `None`.
    fn query(&self, selector: &str) -> Option<Self::Element>;
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
}

/// Deferred work. Neither kind of callback can be cancelled once scheduled.
pub trait Scheduler: 'static {
    /// Run `callback` before the next repaint.
    fn next_frame(&self, callback: Box<dyn FnOnce()>);
    /// Run `callback` once after `millis`.
    fn after(&self, millis: u32, callback: Box<dyn FnOnce()>);
}

/// A click whose default action the controller may cancel.
pub trait ClickEvent {
    fn prevent_default(&self);
}
