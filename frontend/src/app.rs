use leptos::*;

use crate::components::order_modal::OrderModal;
use crate::components::scroll_progress::ScrollProgress;
use crate::components::scroll_top::ScrollTopButton;
use crate::components::toast::ToastHost;
use crate::config::load_site_config;
use crate::controllers::{InteractionController, NavigationController};
use crate::i18n::{page_language, provide_language};
use crate::state::provide_site_state;

/// Root of the page overlays. Mounting it also wires the server-rendered
/// markup, so controller effects live under this owner.
#[component]
pub fn App() -> impl IntoView {
    let state = provide_site_state(load_site_config());
    let language = provide_language(page_language());

    // Desktop links get their active class before the mobile menu copies them.
    InteractionController::new(state, language).attach();
    NavigationController::new(state).attach();
    log::info!("site interactions ready");

    view! {
        <ScrollProgress />
        <ToastHost />
        {move || {
            state
                .order_modal
                .get()
                .map(|count| {
                    view! { <OrderModal count=count on_close=move |_| state.order_modal.set(None) /> }
                })
        }}
        <ScrollTopButton />
    }
}
