use leptos::*;
use shared::{Cart, LinkHighlight, MenuState, ScrollSnapshot, SiteConfig, ToastQueue};

use crate::utils::timing::ms;

/// Everything the page controllers mutate, owned in one place.
///
/// All fields are `Copy` handles, so the state is passed by value into event
/// handlers and effects.
#[derive(Clone, Copy)]
pub struct SiteState {
    pub config: StoredValue<SiteConfig>,
    pub cart: RwSignal<Cart>,
    pub menu: RwSignal<MenuState>,
    pub toasts: RwSignal<ToastQueue>,
    /// Cart count captured when the ordering modal was opened.
    pub order_modal: RwSignal<Option<u32>>,
    pub scroll: RwSignal<ScrollSnapshot>,
    pub highlight: RwSignal<LinkHighlight>,
}

impl SiteState {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config: store_value(config),
            cart: create_rw_signal(Cart::new()),
            menu: create_rw_signal(MenuState::default()),
            toasts: create_rw_signal(ToastQueue::default()),
            order_modal: create_rw_signal(None),
            scroll: create_rw_signal(ScrollSnapshot::default()),
            highlight: create_rw_signal(LinkHighlight::default()),
        }
    }

    /// Read a config value without cloning the whole config.
    pub fn setting<T>(&self, f: impl FnOnce(&SiteConfig) -> T) -> T {
        self.config.with_value(f)
    }

    /// Show a transient status message.
    pub fn notify(&self, message: impl Into<String>) {
        let toasts = self.toasts;
        let (show_delay, visible, removal) = self.setting(|c| {
            (c.toast_show_delay_ms, c.toast_visible_ms, c.toast_removal_ms)
        });

        let message = message.into();
        log::debug!("toast: {}", message);
        let Some(id) = toasts.try_update(|queue| queue.push(message)) else {
            return;
        };

        set_timeout(move || toasts.update(|queue| queue.show(id)), ms(show_delay));
        set_timeout(
            move || {
                toasts.update(|queue| queue.hide(id));
                set_timeout(move || toasts.update(|queue| queue.remove(id)), ms(removal));
            },
            ms(visible),
        );
    }

    pub fn toggle_menu(&self) {
        self.menu.update(|menu| {
            menu.toggle();
        });
    }

    /// Closes the mobile menu, returning whether it was open.
    pub fn close_menu(&self) -> bool {
        self.menu.try_update(MenuState::close).unwrap_or(false)
    }

    pub fn menu_open(&self) -> bool {
        self.menu.with_untracked(MenuState::is_open)
    }
}

pub fn provide_site_state(config: SiteConfig) -> SiteState {
    let state = SiteState::new(config);
    provide_context(state);
    state
}

pub fn use_site_state() -> SiteState {
    expect_context::<SiteState>()
}
