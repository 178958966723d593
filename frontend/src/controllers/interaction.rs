//! Cart, menu filtering, language, contact form and scroll affordances.

use leptos::*;
use shared::form::{SENDING_LABEL_HTML, SENT_MESSAGE};
use shared::navigation::{exceeds_breakpoint, page_from_path};
use shared::order::cart_toast;
use shared::{
    filter_by_category, search, Cart, CategoryFilter, FormPhase, ItemId, MenuItem,
    QuantityAction, ScrollSnapshot, SiteError, Throttle,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement};

use crate::components::gallery::render_gallery;
use crate::i18n::LanguageContext;
use crate::state::SiteState;
use crate::utils::dom::{
    self, closest, data, event_element, has_class, listen, missing, press, query, query_all,
    query_in, require_in, set_class, set_disabled, set_display, text,
};
use crate::utils::reveal::RevealObserver;
use crate::utils::timing::{ms, now_ms, Debouncer, FrameScheduler};

const QUANTITY_SELECTOR: &str = ".quantity-selector";
const QUANTITY_BUTTON: &str = ".quantity-selector__btn";
const QUANTITY_VALUE: &str = ".quantity-selector__value";
const QUANTITY_MINUS: &str = ".quantity-minus";
const MENU_CARD: &str = ".menu-card";
const CART_FLOAT: &str = ".cart-float";
const CART_BADGE: &str = ".cart-float__badge";
const CATEGORY_TAB: &str = ".category-tab";
const SEARCH_INPUT: &str = ".menu-search__input";
const CONTACT_FORM: &str = "#contact-form";
const FORM_SUBMIT: &str = ".form-submit";
const NAV_LINK: &str = ".header__nav-link";
const NAV_LINK_ACTIVE: &str = "header__nav-link--active";

pub struct InteractionController {
    state: SiteState,
    language: LanguageContext,
}

impl InteractionController {
    pub fn new(state: SiteState, language: LanguageContext) -> Self {
        Self { state, language }
    }

    pub fn attach(self) {
        self.init_quantity_selectors();
        self.bind_cart_badge();
        self.bind_document_clicks();
        self.bind_contact_form();
        self.bind_language_switcher();
        self.bind_search();
        self.bind_category_tabs();
        self.bind_scroll();
        self.bind_resize();
        set_active_navigation();

        let reveal = match RevealObserver::new() {
            Ok(reveal) => {
                reveal.observe_page();
                Some(reveal)
            }
            Err(err) => {
                log::warn!("scroll reveal disabled: {}", err);
                None
            }
        };
        render_gallery(self.state, reveal.as_ref());
    }

    fn init_quantity_selectors(&self) {
        let mut items = Vec::new();
        for selector in query_all(QUANTITY_SELECTOR) {
            let item = closest(&selector, MENU_CARD)
                .and_then(|card| data(&card, "item-id"))
                .map(ItemId::new)
                .unwrap_or_else(ItemId::random);

            let _ = selector.set_attribute("data-item-id", item.as_str());
            if let Some(minus) = query_in(&selector, QUANTITY_MINUS) {
                set_disabled(&minus, true);
            }
            items.push(item);
        }

        log::debug!("registered {} quantity selectors", items.len());
        self.state.cart.update(|cart| {
            for item in items {
                cart.register(item);
            }
        });
    }

    fn bind_cart_badge(&self) {
        let cart = self.state.cart;
        create_effect(move |_| {
            let (count, pulse) = cart.with(|cart| (cart.badge_text(), cart.badge_pulses()));
            if let Some(badge) = query(CART_BADGE) {
                badge.set_text_content(Some(&count));
                set_class(&badge, "cart-float__badge--pulse", pulse);
            }
        });
    }

    fn bind_document_clicks(&self) {
        let state = self.state;
        let cart_throttle = store_value(Throttle::new(f64::from(
            state.setting(|c| c.press_animation_ms),
        )));

        window_event_listener(ev::click, move |ev| {
            let Some(target) = event_element(&ev) else {
                return;
            };

            if let Some(button) = closest(&target, QUANTITY_BUTTON) {
                if let Err(err) = handle_quantity_change(state, &button) {
                    log::warn!("quantity change failed: {}", err);
                }
            }

            if let Some(cart_float) = closest(&target, CART_FLOAT) {
                let allowed = cart_throttle
                    .try_update_value(|throttle| throttle.try_fire(now_ms()))
                    .unwrap_or(false);
                if allowed {
                    handle_cart_click(state, &cart_float);
                }
            }
        });
    }

    fn bind_contact_form(&self) {
        let Some(form) = query(CONTACT_FORM) else {
            log::debug!("no {} on this page", CONTACT_FORM);
            return;
        };
        let Ok(form) = form.dyn_into::<HtmlFormElement>() else {
            log::warn!("{} is not a form", CONTACT_FORM);
            return;
        };

        let state = self.state;
        let phase = store_value(FormPhase::default());
        let target = form.clone();
        listen(&form, "submit", move |ev| {
            ev.prevent_default();
            if let Err(err) = submit_contact_form(state, &target, phase) {
                log::warn!("contact form: {}", err);
            }
        });
    }

    fn bind_language_switcher(&self) {
        for option in query_all(crate::i18n::LANGUAGE_OPTION_SELECTOR) {
            let state = self.state;
            let language = self.language;
            let Some(code) = data(&option, "lang") else {
                log::debug!("language option without data-lang");
                continue;
            };
            listen(&option, "click", move |ev| {
                ev.prevent_default();
                language.switch(state, &code);
            });
        }
    }

    fn bind_search(&self) {
        let Some(input) = query(SEARCH_INPUT) else {
            return;
        };
        let delay = self.state.setting(|c| c.search_debounce_ms);
        let debouncer = Debouncer::new();
        listen(&input, "input", move |ev| {
            let needle = event_target_value(&ev);
            debouncer.call(delay, move || apply_search(&needle));
        });
    }

    fn bind_category_tabs(&self) {
        for tab in query_all(CATEGORY_TAB) {
            let state = self.state;
            let target = tab.clone();
            listen(&tab, "click", move |_| switch_category(state, &target));
        }
    }

    fn bind_scroll(&self) {
        let state = self.state;
        let frames = FrameScheduler::new();
        window_event_listener(ev::scroll, move |_| {
            frames.schedule(move || measure_scroll(state));
        });
    }

    fn bind_resize(&self) {
        let state = self.state;
        let delay = state.setting(|c| c.resize_debounce_ms);
        let debouncer = Debouncer::new();
        window_event_listener(ev::resize, move |_| {
            debouncer.call(delay, move || handle_resize(state));
        });
    }
}

fn handle_quantity_change(state: SiteState, button: &Element) -> Result<(), SiteError> {
    let Some(action) = QuantityAction::from_button(
        has_class(button, "quantity-plus"),
        has_class(button, "quantity-minus"),
    ) else {
        return Ok(());
    };

    let selector = closest(button, QUANTITY_SELECTOR).ok_or_else(|| missing(QUANTITY_SELECTOR))?;
    let item = data(&selector, "item-id")
        .map(ItemId::new)
        .ok_or_else(|| missing("[data-item-id]"))?;
    let value = require_in(&selector, QUANTITY_VALUE)?;

    let Some(update) = state.cart.try_update(|cart| cart.apply(&item, action)) else {
        return Ok(());
    };

    value.set_text_content(Some(&update.quantity.to_string()));
    if let Some(minus) = query_in(&selector, QUANTITY_MINUS) {
        set_disabled(&minus, !update.decrement_enabled());
    }
    press(button, 0.9, ms(state.setting(|c| c.press_animation_ms)));
    Ok(())
}

fn handle_cart_click(state: SiteState, cart_float: &Element) {
    let count = state.cart.with_untracked(Cart::total);
    state.notify(cart_toast(count));
    press(cart_float, 0.95, ms(state.setting(|c| c.press_animation_ms)));

    if count > 0 {
        log::info!("opening order options for {} items", count);
        state.order_modal.set(Some(count));
    }
}

fn switch_category(state: SiteState, tab: &Element) {
    for other in query_all(CATEGORY_TAB) {
        set_class(&other, "category-tab--active", false);
    }
    set_class(tab, "category-tab--active", true);
    press(tab, 0.95, ms(state.setting(|c| c.press_animation_ms)));

    let Some(tag) = data(tab, "category") else {
        log::debug!("category tab without data-category");
        return;
    };
    let filter = CategoryFilter::from_tag(&tag);
    let cards = query_all(MENU_CARD);
    let items: Vec<MenuItem> = cards.iter().map(read_menu_item).collect();
    apply_visibility(&cards, &filter_by_category(&items, &filter));
}

fn apply_search(query: &str) {
    let cards = query_all(MENU_CARD);
    let items: Vec<MenuItem> = cards.iter().map(read_menu_item).collect();
    apply_visibility(&cards, &search(&items, query));
}

fn read_menu_item(card: &Element) -> MenuItem {
    MenuItem {
        category: data(card, "category"),
        title: query_in(card, ".menu-card__title")
            .map(|title| text(&title))
            .unwrap_or_default(),
        description: query_in(card, ".menu-card__description").map(|desc| text(&desc)),
    }
}

fn apply_visibility(cards: &[Element], visible: &[bool]) {
    for (card, &visible) in cards.iter().zip(visible) {
        set_display(card, visible);
        if visible {
            set_class(card, "fade-in", true);
        }
    }
}

fn submit_contact_form(
    state: SiteState,
    form: &HtmlFormElement,
    phase: StoredValue<FormPhase>,
) -> Result<(), SiteError> {
    let button = require_in(form, FORM_SUBMIT)?;
    match phase.try_update_value(FormPhase::begin) {
        Some(Ok(())) => {}
        Some(Err(err)) => {
            log::debug!("{}", err);
            return Ok(());
        }
        None => return Ok(()),
    }

    let label = text(&button);
    button.set_inner_html(SENDING_LABEL_HTML);
    set_disabled(&button, true);

    let form = form.clone();
    let delay = state.setting(|c| c.form_submit_delay_ms);
    set_timeout(
        move || {
            button.set_text_content(Some(&label));
            set_disabled(&button, false);
            state.notify(SENT_MESSAGE);
            form.reset();
            phase.update_value(|phase| {
                let _ = phase.finish();
            });
            log::info!("contact form sent");
        },
        ms(delay),
    );
    Ok(())
}

fn measure_scroll(state: SiteState) {
    let body_height = document()
        .body()
        .map(|body| f64::from(body.offset_height()))
        .unwrap_or(0.0);
    let threshold = state.setting(|c| c.scroll_top_threshold);
    let snapshot =
        ScrollSnapshot::measure(dom::scroll_y(), body_height, dom::viewport_height(), threshold);
    state.scroll.set(snapshot);
}

fn handle_resize(state: SiteState) {
    let breakpoint = state.setting(|c| c.mobile_breakpoint);
    if exceeds_breakpoint(dom::viewport_width(), breakpoint) && state.close_menu() {
        log::debug!("closed mobile menu on resize past {}px", breakpoint);
    }
}

/// Marks the desktop link pointing at the current page.
fn set_active_navigation() {
    let path = window().location().pathname().unwrap_or_default();
    let page = page_from_path(&path);
    for link in query_all(NAV_LINK) {
        let current = link.get_attribute("href").as_deref() == Some(page.as_str());
        set_class(&link, NAV_LINK_ACTIVE, current);
    }
}
