use leptos::html::Nav;
use leptos::*;
use shared::navigation::slide_in_delay;
use shared::{MenuState, NavEntry};

use crate::state::SiteState;

pub const MOBILE_MENU_ID: &str = "mobile-menu";

/// Off-canvas navigation built from the desktop links.
///
/// Returned as a detached element so the caller can append it to the page
/// header; the reactive bindings stay owned by the caller's scope.
pub fn mobile_menu(state: SiteState, entries: Vec<NavEntry>) -> HtmlElement<Nav> {
    let stagger = state.setting(|c| c.slide_in_stagger_ms);
    let is_open = move || state.menu.with(MenuState::is_open);

    let items = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let delay = slide_in_delay(index, stagger);
            let NavEntry {
                href,
                inner_html,
                active,
                cta,
            } = entry;
            let link_href = href.clone();
            let highlighted = move || {
                state
                    .highlight
                    .with(|highlight| highlight.is_active(link_href.as_deref(), active))
            };

            view! {
                <li>
                    <a
                        href=href
                        class="mobile-menu__link"
                        class:mobile-menu__cta=cta
                        class=("mobile-menu__link--active", highlighted)
                        class:slide-in-left=is_open
                        style:animation-delay=move || is_open().then(|| delay.clone())
                        inner_html=inner_html
                        on:click=move |_| {
                            state.close_menu();
                        }
                    ></a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="mobile-menu" id=MOBILE_MENU_ID role="navigation" class:active=is_open>
            <ul class="mobile-menu__list">{items}</ul>
        </nav>
    }
}
