use leptos::*;

use crate::state::use_site_state;
use crate::utils::dom::smooth_scroll_to;

/// "Back to top" button, created the first time the page is scrolled past
/// the threshold and only toggled afterwards.
#[component]
pub fn ScrollTopButton() -> impl IntoView {
    let state = use_site_state();
    let visible = create_memo(move |_| state.scroll.with(|snapshot| snapshot.show_scroll_top));
    let created =
        create_memo(move |was: Option<&bool>| was.copied().unwrap_or(false) || visible.get());

    view! {
        <Show when=move || created.get() fallback=|| ()>
            <button
                class="scroll-top-btn"
                class:visible=move || visible.get()
                on:click=|_| smooth_scroll_to(0.0)
            >
                "↑"
            </button>
        </Show>
    }
}
