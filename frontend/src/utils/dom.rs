//! Thin helpers over `web_sys` for the server-rendered markup.
//!
//! Lookups return `Option` for optional markup and `Result` for markup an
//! operation cannot do without.

use std::time::Duration;

use leptos::{document, set_timeout, window};
use shared::SiteError;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, Event, EventTarget, HtmlButtonElement, HtmlElement, NodeList, ScrollBehavior,
    ScrollToOptions,
};

pub fn js_error(err: JsValue) -> SiteError {
    SiteError::Js(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

pub fn missing(selector: &str) -> SiteError {
    SiteError::MissingElement(selector.to_string())
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok().flatten()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    elements(document().query_selector_all(selector))
}

pub fn query_in(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok().flatten()
}

pub fn require_in(parent: &Element, selector: &str) -> Result<Element, SiteError> {
    query_in(parent, selector).ok_or_else(|| missing(selector))
}

fn elements(list: Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn closest(el: &Element, selector: &str) -> Option<Element> {
    el.closest(selector).ok().flatten()
}

pub fn event_element(event: &Event) -> Option<Element> {
    event.target().and_then(|target| target.dyn_into::<Element>().ok())
}

/// `data-*` attribute lookup, treating empty values as absent.
pub fn data(el: &Element, key: &str) -> Option<String> {
    el.get_attribute(&format!("data-{}", key))
        .filter(|value| !value.is_empty())
}

pub fn text(el: &Element) -> String {
    el.text_content().unwrap_or_default()
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let _ = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}

/// Sets an inline style property; an empty value removes it.
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        let style = el.style();
        let _ = if value.is_empty() {
            style.remove_property(property).map(|_| ())
        } else {
            style.set_property(property, value)
        };
    }
}

pub fn set_display(el: &Element, visible: bool) {
    set_style(el, "display", if visible { "block" } else { "none" });
}

pub fn set_disabled(el: &Element, disabled: bool) {
    match el.dyn_ref::<HtmlButtonElement>() {
        Some(button) => button.set_disabled(disabled),
        None if disabled => {
            let _ = el.set_attribute("disabled", "");
        }
        None => {
            let _ = el.remove_attribute("disabled");
        }
    }
}

/// Short "pressed" scale animation.
pub fn press(el: &Element, scale: f64, duration: Duration) {
    set_style(el, "transform", &format!("scale({})", scale));
    let el = el.clone();
    set_timeout(move || set_style(&el, "transform", ""), duration);
}

pub fn smooth_scroll_to(top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0)
}

/// Attaches a listener for the lifetime of the page.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("failed to listen for {}: {:?}", event, err);
    }
    closure.forget();
}
