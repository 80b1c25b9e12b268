//! `web-sys` side of the controller: real elements, the window, frame and
//! timer scheduling, and the event listeners.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, ScrollBehavior,
    ScrollToOptions, Window,
};

use crate::config::PageConfig;
use crate::controller::PageController;
use crate::dom::{ClickEvent, PageElement, Scheduler, Viewport};
use crate::error::InitError;

#[derive(Clone)]
pub struct WebElement(Element);

impl WebElement {
    pub fn as_element(&self) -> &Element {
        &self.0
    }
}

impl PageElement for WebElement {
    fn add_class(&self, name: &str) {
        let _ = self.0.class_list().add_1(name);
    }

    fn remove_class(&self, name: &str) {
        let _ = self.0.class_list().remove_1(name);
    }

    fn has_class(&self, name: &str) -> bool {
        self.0.class_list().contains(name)
    }

    fn toggle_class(&self, name: &str) {
        let _ = self.0.class_list().toggle(name);
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Some(html) = self.0.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property(property, value);
        }
    }

    fn viewport_top(&self) -> f64 {
        self.0.get_bounding_client_rect().top()
    }

    fn height(&self) -> f64 {
        self.0
            .dyn_ref::<HtmlElement>()
            .map_or(0.0, |html| html.offset_height() as f64)
    }
}

impl ClickEvent for Event {
    fn prevent_default(&self) {
        Event::prevent_default(self);
    }
}

pub struct WebViewport {
    window: Window,
    document: Document,
}

impl WebViewport {
    pub fn new() -> Result<Self, InitError> {
        let window = web_sys::window().ok_or(InitError::NoWindow)?;
        let document = window.document().ok_or(InitError::NoDocument)?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl Viewport for WebViewport {
    type Element = WebElement;

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn inner_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn query(&self, selector: &str) -> Option<WebElement> {
        // querySelector throws on malformed selectors such as "#1st"
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .map(WebElement)
    }

    fn query_all(&self, selector: &str) -> Vec<WebElement> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(WebElement)
            .collect()
    }
}

/// `requestAnimationFrame` for frames, `gloo_timers` for delays. Handles are
/// forgotten, so nothing scheduled here is ever cancelled.
pub struct BrowserScheduler {
    window: Window,
}

impl BrowserScheduler {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Scheduler for BrowserScheduler {
    fn next_frame(&self, callback: Box<dyn FnOnce()>) {
        let frame = Closure::once_into_js(move || callback());
        let _ = self.window.request_animation_frame(frame.unchecked_ref());
    }

    fn after(&self, millis: u32, callback: Box<dyn FnOnce()>) {
        let timeout = Timeout::new(millis, move || callback());
        timeout.forget();
    }
}

pub type WebController = PageController<WebViewport, BrowserScheduler>;

/// Runs `init` once the document has been parsed, or right away if that
/// already happened before the module loaded.
pub fn on_document_ready(init: impl FnOnce() + 'static) -> Result<(), InitError> {
    let window = web_sys::window().ok_or(InitError::NoWindow)?;
    let document = window.document().ok_or(InitError::NoDocument)?;

    if !still_loading(&document.ready_state()) {
        init();
        return Ok(());
    }

    let callback = Closure::once_into_js(init);
    document
        .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        .map_err(|err| InitError::Listener {
            event: "DOMContentLoaded",
            reason: format!("{:?}", err),
        })
}

fn still_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Builds the controller from the live document and attaches every listener.
/// Listeners stay attached for the lifetime of the page.
pub fn start(config: PageConfig) -> Result<Rc<WebController>, InitError> {
    let viewport = WebViewport::new()?;
    let scheduler = BrowserScheduler::new(viewport.window().clone());
    let controller = Rc::new(PageController::new(config, viewport, scheduler));

    attach_menu_toggle(&controller)?;
    let anchors = attach_smooth_scroll(&controller)?;
    attach_scroll(&controller)?;

    info!("Top page controller ready ({} in-page links)", anchors);
    Ok(controller)
}

fn attach_scroll(controller: &Rc<WebController>) -> Result<(), InitError> {
    let window = controller.viewport().window().clone();
    let controller = Rc::clone(controller);
    listen(&window, "scroll", move |_| controller.handle_scroll())
}

fn attach_menu_toggle(controller: &Rc<WebController>) -> Result<(), InitError> {
    let Some(button) = controller.menu_button() else {
        return Ok(());
    };
    let target = button.as_element().clone();
    let controller = Rc::clone(controller);
    listen(&target, "click", move |_| controller.toggle_menu())
}

fn attach_smooth_scroll(controller: &Rc<WebController>) -> Result<usize, InitError> {
    let anchors = controller
        .viewport()
        .query_all(controller.config().anchor_selector);

    for anchor in &anchors {
        let element = anchor.as_element().clone();
        let controller = Rc::clone(controller);
        listen(anchor.as_element(), "click", move |event: Event| {
            let href = element.get_attribute("href").unwrap_or_default();
            controller.handle_anchor_click(&event, &href);
        })?;
    }
    Ok(anchors.len())
}

fn listen(
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), InitError> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|err| InitError::Listener {
            event,
            reason: format!("{:?}", err),
        })?;
    closure.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_loading_state_waits_for_content_loaded() {
        assert!(still_loading("loading"));
        assert!(!still_loading("interactive"));
        assert!(!still_loading("complete"));
    }
}
