use leptos::*;

use crate::state::use_site_state;

/// Thin bar whose width mirrors how far the page has been scrolled.
#[component]
pub fn ScrollProgress() -> impl IntoView {
    let state = use_site_state();
    let width = move || state.scroll.with(|snapshot| snapshot.width_style());

    view! {
        <div class="scroll-progress" style:width=width></div>
    }
}
