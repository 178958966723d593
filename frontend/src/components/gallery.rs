use leptos::html::Div;
use leptos::*;
use shared::{gallery_images, GalleryImage, FALLBACK_IMAGES};
use wasm_bindgen::{JsCast, JsValue};

use crate::state::SiteState;
use crate::utils::dom::{event_element, query, set_class};
use crate::utils::reveal::RevealObserver;

pub const GALLERY_SELECTOR: &str = "#instagram-gallery";
/// Global array of image filenames a page may define before the module loads.
const GALLERY_GLOBAL: &str = "instagramImagesData";

/// Fills `#instagram-gallery`, if the page has one.
pub fn render_gallery(state: SiteState, reveal: Option<&RevealObserver>) {
    let Some(container) = query(GALLERY_SELECTOR) else {
        return;
    };

    let files = page_gallery_files().unwrap_or_else(|| {
        log::debug!("no {} on the page, using fallback images", GALLERY_GLOBAL);
        FALLBACK_IMAGES.iter().map(|file| file.to_string()).collect()
    });
    let base_path = state.setting(|c| c.gallery_base_path.clone());

    container.set_inner_html("");
    for image in gallery_images(&files, &base_path) {
        let item = gallery_item(image);
        if let Err(err) = container.append_child(&item) {
            log::warn!("failed to append gallery item: {:?}", err);
            continue;
        }
        if let Some(reveal) = reveal {
            reveal.observe(&item);
        }
    }
}

fn gallery_item(image: GalleryImage) -> HtmlElement<Div> {
    view! {
        <div class="instagram-item animate-on-scroll">
            <img
                src=image.src
                alt=image.alt
                loading="lazy"
                on:load=|ev| {
                    if let Some(img) = event_element(&ev) {
                        set_class(&img, "loaded", true);
                    }
                }
            />
            <div class="instagram-overlay">
                <span>"📸"</span>
            </div>
        </div>
    }
}

fn page_gallery_files() -> Option<Vec<String>> {
    let value = js_sys::Reflect::get(&window(), &JsValue::from_str(GALLERY_GLOBAL)).ok()?;
    let files = value.dyn_into::<js_sys::Array>().ok()?;
    Some(files.iter().filter_map(|file| file.as_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_page_gallery_files_reads_window_global() {
        let key = JsValue::from_str(GALLERY_GLOBAL);
        assert_eq!(page_gallery_files(), None);

        let files = js_sys::Array::of2(&"a.jpg".into(), &"b-c.png".into());
        js_sys::Reflect::set(&window(), &key, &files).unwrap();
        assert_eq!(
            page_gallery_files(),
            Some(vec!["a.jpg".to_string(), "b-c.png".to_string()])
        );

        js_sys::Reflect::delete_property(&window(), &key).unwrap();
        assert_eq!(page_gallery_files(), None);
    }
}
