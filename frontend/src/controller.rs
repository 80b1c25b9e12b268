use std::rc::Rc;

use log::debug;

use crate::config::PageConfig;
use crate::dom::{ClickEvent, PageElement, Scheduler, Viewport};
use crate::scroll;

/// Scroll and click behavior of the top page.
///
/// Handles are looked up once in [`PageController::new`]. Any of them may be
/// missing; the steps that need a missing handle are skipped.
pub struct PageController<V: Viewport, S: Scheduler> {
    config: PageConfig,
    viewport: V,
    scheduler: S,
    page_top: Option<V::Element>,
    header: Option<V::Element>,
    hero_image: Option<V::Element>,
    menu_button: Option<V::Element>,
}

impl<V: Viewport, S: Scheduler> PageController<V, S> {
    pub fn new(config: PageConfig, viewport: V, scheduler: S) -> Self {
        let page_top = lookup(&viewport, config.page_top_selector);
        let header = lookup(&viewport, config.header_selector);
        let hero_image = lookup(&viewport, config.hero_image_selector);
        let menu_button = lookup(&viewport, config.menu_button_selector);

        Self {
            config,
            viewport,
            scheduler,
            page_top,
            header,
            hero_image,
            menu_button,
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn menu_button(&self) -> Option<&V::Element> {
        self.menu_button.as_ref()
    }

    /// Window scroll listener body. Reads the offset now and applies it on
    /// the next frame.
    pub fn handle_scroll(self: &Rc<Self>) {
        let offset = self.viewport.scroll_y();
        let controller = Rc::clone(self);
        self.scheduler
            .next_frame(Box::new(move || controller.apply_frame(offset)));
    }

    /// All per-frame visual updates for a captured scroll offset, in order.
    pub fn apply_frame(&self, offset: f64) {
        self.update_page_top(offset);
        self.update_header(offset);
        self.update_hero_image(offset);
        self.reveal_animated();
    }

    fn update_page_top(&self, offset: f64) {
        let Some(page_top) = &self.page_top else {
            return;
        };
        if scroll::page_top_visible(&self.config, offset) {
            page_top.add_class(self.config.shown_class);
        } else {
            page_top.remove_class(self.config.shown_class);
        }
    }

    fn update_header(&self, offset: f64) {
        let Some(header) = &self.header else {
            return;
        };
        let fixed = self.config.header_fixed_class;
        let scrolled = self.config.header_scrolled_class;

        if scroll::header_fixed(&self.config, offset) {
            if header.has_class(fixed) {
                return;
            }
            header.add_class(fixed);
            // Not cancelled when the header un-fixes before it fires.
            let header = header.clone();
            self.scheduler.after(
                self.config.header_scrolled_delay_ms,
                Box::new(move || header.add_class(scrolled)),
            );
        } else {
            header.remove_class(fixed);
            header.remove_class(scrolled);
        }
    }

    fn update_hero_image(&self, offset: f64) {
        if let Some(hero_image) = &self.hero_image {
            let scale = scroll::hero_scale(&self.config, offset);
            hero_image.set_style("transform", &scroll::scale_transform(scale));
        }
    }

    /// Marks every animated element above the reveal line as shown.
    /// Elements are never un-shown.
    pub fn reveal_animated(&self) {
        let scroll_y = self.viewport.scroll_y();
        let viewport_height = self.viewport.inner_height();

        for element in self.viewport.query_all(self.config.animated_selector) {
            if scroll::is_revealed(&self.config, element.viewport_top(), scroll_y, viewport_height) {
                element.add_class(self.config.shown_class);
            }
        }
    }

    pub fn toggle_menu(&self) {
        if let Some(header) = &self.header {
            header.toggle_class(self.config.menu_open_class);
        }
    }

    /// Click on an in-page link. Navigation is always cancelled, whether or
    /// not the link resolves.
    pub fn handle_anchor_click(&self, event: &impl ClickEvent, href: &str) -> bool {
        event.prevent_default();
        self.follow_anchor(href)
    }

    /// Smooth-scrolls to the target of an in-page link and closes the mobile
    /// menu. Returns false when `href` resolves to nothing.
    pub fn follow_anchor(&self, href: &str) -> bool {
        let selector = scroll::anchor_target_selector(href);
        let Some(target) = self.viewport.query(selector) else {
            debug!("No scroll target for {:?}", href);
            return false;
        };

        let header_height = self.header.as_ref().map_or(0.0, |header| header.height());
        let top = scroll::anchor_destination(self.viewport.scroll_y(), target.viewport_top(), header_height);
        self.viewport.smooth_scroll_to(top);

        if let Some(header) = &self.header {
            if header.has_class(self.config.menu_open_class) {
                header.remove_class(self.config.menu_open_class);
            }
        }
        true
    }
}

fn lookup<V: Viewport>(viewport: &V, selector: &str) -> Option<V::Element> {
    let element = viewport.query(selector);
    if element.is_none() {
        debug!("{} not found, skipping its behavior", selector);
    }
    element
}
