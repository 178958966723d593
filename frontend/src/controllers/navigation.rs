//! Mobile menu, in-page anchor scrolling and active-link tracking.

use leptos::*;
use shared::navigation::{anchor_scroll_top, current_section, tab_wrap, TabWrap};
use shared::{LinkHighlight, MenuState, NavEntry, Section};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, MouseEvent, Node};

use crate::components::mobile_menu::{mobile_menu, MOBILE_MENU_ID};
use crate::state::SiteState;
use crate::utils::dom::{
    self, closest, event_element, has_class, query, query_all, query_in, set_class, set_style,
    smooth_scroll_to, text,
};
use crate::utils::timing::FrameScheduler;

const HEADER: &str = ".header";
const NAV_LIST: &str = ".header__nav-list";
const NAV_ITEM_LINK: &str = ".header__nav-item .header__nav-link";
const NAV_LINK: &str = ".header__nav-link";
const NAV_LINK_ACTIVE: &str = "header__nav-link--active";
const CTA_BUTTON: &str = ".header__cta-button";
const MENU_TOGGLE: &str = ".mobile-menu-toggle";
const MOBILE_MENU: &str = ".mobile-menu";
const MENU_FOCUSABLE: &str = ".mobile-menu a, .mobile-menu button";
const ANCHOR_LINK: &str = "a[href^=\"#\"]";
const TRACKED_SECTIONS: &str = "section[id], .page-title-section";

pub struct NavigationController {
    state: SiteState,
}

impl NavigationController {
    pub fn new(state: SiteState) -> Self {
        Self { state }
    }

    pub fn attach(self) {
        self.build_mobile_menu();
        self.bind_menu_toggle();
        self.bind_dismissal();
        self.bind_anchor_links();
        self.bind_link_tracking();
    }

    fn build_mobile_menu(&self) {
        if query(NAV_LIST).is_none() {
            log::debug!("no {} on this page, skipping mobile menu", NAV_LIST);
            return;
        }
        let Some(header) = query(HEADER) else {
            log::warn!("{} exists without {}", NAV_LIST, HEADER);
            return;
        };

        let entries = read_nav_entries();
        log::debug!("building mobile menu with {} entries", entries.len());
        let menu = mobile_menu(self.state, entries);
        if let Err(err) = header.append_child(&menu) {
            log::warn!("failed to mount mobile menu: {:?}", err);
        }
    }

    fn bind_menu_toggle(&self) {
        let Some(toggle) = query(MENU_TOGGLE) else {
            log::debug!("no {} on this page", MENU_TOGGLE);
            return;
        };
        let _ = toggle.set_attribute("aria-label", "Toggle navigation menu");
        let _ = toggle.set_attribute("aria-expanded", "false");
        let _ = toggle.set_attribute("aria-controls", MOBILE_MENU_ID);

        let state = self.state;
        dom::listen(&toggle, "click", move |ev| {
            ev.stop_propagation();
            state.toggle_menu();
        });

        create_effect(move |ran: Option<()>| {
            let menu = state.menu.get();
            // The markup already shows the closed state.
            if ran.is_some() {
                render_menu_state(&toggle, menu);
            }
        });
    }

    fn bind_dismissal(&self) {
        let state = self.state;
        window_event_listener(ev::click, move |ev: MouseEvent| {
            if !state.menu_open() {
                return;
            }
            let Some(target) = event_element(&ev) else {
                return;
            };
            let target: &Node = &target;
            let inside =
                |selector: &str| query(selector).is_some_and(|el| el.contains(Some(target)));

            let dismissed = state.menu.with_untracked(|menu| {
                menu.dismissed_by_click(inside(MOBILE_MENU), inside(MENU_TOGGLE))
            });
            if dismissed {
                state.close_menu();
            }
        });

        window_event_listener(ev::keydown, move |ev: KeyboardEvent| {
            let key = ev.key();
            if state.menu.with_untracked(|menu| menu.dismissed_by_key(&key)) {
                state.close_menu();
            } else if key == "Tab" && state.menu_open() {
                trap_focus(&ev);
            }
        });
    }

    fn bind_anchor_links(&self) {
        let state = self.state;
        window_event_listener(ev::click, move |ev: MouseEvent| {
            let Some(link) = event_element(&ev).and_then(|el| closest(&el, ANCHOR_LINK)) else {
                return;
            };
            ev.prevent_default();

            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(target) = query(&href).and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                log::debug!("no scroll target for {}", href);
                return;
            };

            let header_height = query(HEADER)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                .map(|header| f64::from(header.offset_height()))
                .unwrap_or(0.0);
            let gap = state.setting(|c| c.anchor_gap);
            smooth_scroll_to(anchor_scroll_top(
                f64::from(target.offset_top()),
                header_height,
                gap,
            ));
            state.close_menu();
        });
    }

    fn bind_link_tracking(&self) {
        let state = self.state;
        let frames = FrameScheduler::new();
        window_event_listener(ev::scroll, move |_| {
            frames.schedule(move || track_active_section(state));
        });

        create_effect(move |_| {
            state.highlight.with(|highlight| {
                if highlight.is_tracking() {
                    apply_desktop_highlight(highlight);
                }
            });
        });
    }
}

fn read_nav_entries() -> Vec<NavEntry> {
    let mut entries: Vec<NavEntry> = query_all(NAV_ITEM_LINK)
        .iter()
        .map(|link| NavEntry {
            href: link.get_attribute("href"),
            inner_html: link.inner_html(),
            active: has_class(link, NAV_LINK_ACTIVE),
            cta: false,
        })
        .collect();

    if let Some(cta) = query(CTA_BUTTON) {
        entries.push(NavEntry {
            href: cta.get_attribute("href"),
            inner_html: cta.inner_html(),
            active: false,
            cta: true,
        });
    }
    entries
}

fn render_menu_state(toggle: &Element, menu: MenuState) {
    let open = menu.is_open();
    set_class(toggle, "active", open);
    let _ = toggle.set_attribute("aria-expanded", menu.aria_expanded());
    match query_in(toggle, "i") {
        Some(icon) => icon.set_text_content(Some(menu.toggle_icon())),
        None => toggle.set_text_content(Some(menu.toggle_icon())),
    }

    if let Some(body) = document().body() {
        set_style(&body, "overflow", if open { "hidden" } else { "" });
    }
    if let Some(header) = query(HEADER) {
        set_class(&header, "menu-open", open);
    }
}

fn trap_focus(ev: &KeyboardEvent) {
    let focusable = query_all(MENU_FOCUSABLE);
    let focused = document().active_element();
    let active = focused.and_then(|focused| {
        let focused: &Node = &focused;
        focusable.iter().position(|el| el.is_same_node(Some(focused)))
    });

    let next = match tab_wrap(active, focusable.len(), ev.shift_key()) {
        Some(TabWrap::ToFirst) => focusable.first(),
        Some(TabWrap::ToLast) => focusable.last(),
        None => return,
    };
    if let Some(next) = next.and_then(|el| el.dyn_ref::<HtmlElement>()) {
        ev.prevent_default();
        let _ = next.focus();
    }
}

fn measure_sections() -> Vec<Section> {
    query_all(TRACKED_SECTIONS)
        .into_iter()
        .filter_map(|el| {
            let heading = query_in(&el, "h1, h2").map(|h| text(&h));
            let key = Section::key_from(Some(el.id().as_str()), heading.as_deref());
            let el = el.dyn_into::<HtmlElement>().ok()?;
            Some(Section {
                key,
                top: f64::from(el.offset_top()),
                height: f64::from(el.offset_height()),
            })
        })
        .collect()
}

fn track_active_section(state: SiteState) {
    let position = dom::scroll_y() + state.setting(|c| c.active_section_offset);
    let sections = measure_sections();
    let next = LinkHighlight::Section(current_section(&sections, position).map(str::to_string));
    if state.highlight.with_untracked(|current| *current != next) {
        state.highlight.set(next);
    }
}

fn apply_desktop_highlight(highlight: &LinkHighlight) {
    for link in query_all(NAV_LINK) {
        let href = link.get_attribute("href");
        let active = highlight.is_active(href.as_deref(), false);
        set_class(&link, NAV_LINK_ACTIVE, active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_read_nav_entries_appends_cta() {
        let header = document().create_element("header").unwrap();
        header.set_inner_html(
            r#"
            <ul class="header__nav-list">
                <li class="header__nav-item"><a class="header__nav-link header__nav-link--active" href="index.html">Accueil</a></li>
                <li class="header__nav-item"><a class="header__nav-link" href="menu.html"><b>Menu</b></a></li>
            </ul>
            <a class="header__cta-button" href="contact.html">Réserver</a>
            "#,
        );
        document().body().unwrap().append_child(&header).unwrap();

        let entries = read_nav_entries();
        assert_eq!(entries.len(), 3);
        assert!(entries[0].active);
        assert_eq!(entries[1].inner_html, "<b>Menu</b>");
        assert!(!entries[1].active);
        assert!(entries[2].cta);
        assert_eq!(entries[2].href.as_deref(), Some("contact.html"));

        header.remove();
    }

    #[wasm_bindgen_test]
    fn test_render_menu_state_updates_toggle_and_page() {
        let toggle = document().create_element("button").unwrap();
        toggle.set_inner_html("<i>☰</i>");
        document().body().unwrap().append_child(&toggle).unwrap();

        let mut menu = MenuState::default();
        menu.open();
        render_menu_state(&toggle, menu);
        assert!(has_class(&toggle, "active"));
        assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));
        assert_eq!(text(&toggle), "✕");
        let body = document().body().unwrap();
        assert_eq!(body.style().get_property_value("overflow").unwrap(), "hidden");

        menu.close();
        render_menu_state(&toggle, menu);
        assert!(!has_class(&toggle, "active"));
        assert_eq!(text(&toggle), "☰");
        assert_eq!(body.style().get_property_value("overflow").unwrap(), "");

        toggle.remove();
    }
}
