use leptos::*;
use shared::language::{TextDirection, GENERIC_SWITCH_MESSAGE, RTL_MARKER_CLASS};
use shared::{Language, SiteError};
use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit};

use crate::state::SiteState;
use crate::utils::dom::{data, js_error, query_all, set_class};

pub const LANGUAGE_OPTION_SELECTOR: &str = ".lang-btn";
/// Dispatched on `document` after every switch, with `detail.lang`.
pub const LANGUAGE_CHANGED_EVENT: &str = "languageChanged";

/// Active language of the page.
///
/// Switching only changes direction, a marker class and the `lang`
/// attribute; no text is translated.
#[derive(Clone, Copy)]
pub struct LanguageContext {
    pub language: RwSignal<Language>,
}

impl LanguageContext {
    pub fn new(language: Language) -> Self {
        Self {
            language: create_rw_signal(language),
        }
    }

    /// Handles a click on a `.lang-btn` carrying `code`.
    pub fn switch(&self, state: SiteState, code: &str) {
        log::info!("Switching language to: {}", code);

        for option in query_all(LANGUAGE_OPTION_SELECTOR) {
            let selected = data(&option, "lang").as_deref() == Some(code);
            set_class(&option, "active", selected);
        }

        let direction = match code.parse::<Language>() {
            Ok(language) => {
                self.language.set(language);
                state.notify(language.switch_message());
                language.dir()
            }
            Err(err) => {
                log::warn!("{}", err);
                state.notify(GENERIC_SWITCH_MESSAGE);
                TextDirection::Ltr
            }
        };
        apply_direction(direction);

        if let Err(err) = dispatch_language_changed(code) {
            log::warn!("failed to announce language change: {}", err);
        }
    }
}

fn apply_direction(direction: TextDirection) {
    if let Some(root) = document().document_element() {
        let _ = root.set_attribute("dir", direction.as_str());
    }
    if let Some(body) = document().body() {
        set_class(&body, RTL_MARKER_CLASS, direction == TextDirection::Rtl);
    }
}

fn dispatch_language_changed(code: &str) -> Result<(), SiteError> {
    let detail = js_sys::Object::new();
    js_sys::Reflect::set(&detail, &JsValue::from_str("lang"), &JsValue::from_str(code))
        .map_err(js_error)?;

    let init = CustomEventInit::new();
    init.set_detail(&detail);
    let event = CustomEvent::new_with_event_init_dict(LANGUAGE_CHANGED_EVENT, &init)
        .map_err(js_error)?;
    document().dispatch_event(&event).map_err(js_error)?;
    Ok(())
}

/// Language declared by `<html lang>`, defaulting to French.
///
/// Only read: the page keeps whatever tag it was served with.
pub fn page_language() -> Language {
    document()
        .document_element()
        .and_then(|root| root.get_attribute("lang"))
        .and_then(|tag| Language::from_tag(&tag).ok())
        .unwrap_or_default()
}

pub fn provide_language(language: Language) -> LanguageContext {
    let ctx = LanguageContext::new(language);
    provide_context(ctx);
    ctx
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_apply_direction() {
        apply_direction(TextDirection::Rtl);
        let root = document().document_element().unwrap();
        let body = document().body().unwrap();
        assert_eq!(root.get_attribute("dir").as_deref(), Some("rtl"));
        assert!(body.class_list().contains(RTL_MARKER_CLASS));

        apply_direction(TextDirection::Ltr);
        assert_eq!(root.get_attribute("dir").as_deref(), Some("ltr"));
        assert!(!body.class_list().contains(RTL_MARKER_CLASS));
    }

    #[wasm_bindgen_test]
    fn test_regional_page_tag_is_read_but_not_rewritten() {
        let runtime = create_runtime();
        let root = document().document_element().unwrap();
        let served = root.get_attribute("lang");

        for (tag, expected) in [("en-US", Language::En), ("ar-DZ", Language::Ar), ("de-DE", Language::Fr)] {
            root.set_attribute("lang", tag).unwrap();
            let ctx = provide_language(page_language());
            assert_eq!(ctx.language.get_untracked(), expected);
            assert_eq!(root.get_attribute("lang").as_deref(), Some(tag));
        }

        match served {
            Some(lang) => root.set_attribute("lang", &lang).unwrap(),
            None => root.remove_attribute("lang").unwrap(),
        }
        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn test_language_changed_event_carries_code() {
        use std::cell::RefCell;
        use std::rc::Rc;
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let seen = Rc::new(RefCell::new(None::<String>));
        let sink = seen.clone();
        let listener = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let detail = event.unchecked_into::<CustomEvent>().detail();
            let lang = js_sys::Reflect::get(&detail, &JsValue::from_str("lang")).unwrap();
            *sink.borrow_mut() = lang.as_string();
        }) as Box<dyn FnMut(web_sys::Event)>);
        document()
            .add_event_listener_with_callback(LANGUAGE_CHANGED_EVENT, listener.as_ref().unchecked_ref())
            .unwrap();

        dispatch_language_changed("ar").unwrap();
        assert_eq!(seen.borrow().as_deref(), Some("ar"));

        document()
            .remove_event_listener_with_callback(LANGUAGE_CHANGED_EVENT, listener.as_ref().unchecked_ref())
            .unwrap();
    }
}
