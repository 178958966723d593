use js_sys::Array;
use shared::SiteError;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom::{js_error, query_all};

pub const REVEAL_SELECTOR: &str = ".animate-on-scroll";
const VISIBLE_CLASS: &str = "visible";

/// Adds `visible` to `.animate-on-scroll` elements as they enter the viewport.
#[derive(Clone)]
pub struct RevealObserver {
    observer: IntersectionObserver,
}

impl RevealObserver {
    pub fn new() -> Result<Self, SiteError> {
        let callback = Closure::wrap(Box::new(|entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1(VISIBLE_CLASS);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(0.1));
        options.set_root_margin("0px 0px -50px 0px");

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(js_error)?;
        callback.forget();

        Ok(Self { observer })
    }

    pub fn observe(&self, el: &Element) {
        self.observer.observe(el);
    }

    pub fn observe_page(&self) {
        for el in query_all(REVEAL_SELECTOR) {
            self.observe(&el);
        }
    }
}
