use leptos::*;

use crate::state::use_site_state;

/// Renders the toast queue; lifetimes are driven by `SiteState::notify`.
#[component]
pub fn ToastHost() -> impl IntoView {
    let state = use_site_state();

    view! {
        <For
            each=move || state.toasts.with(|queue| queue.iter().cloned().collect::<Vec<_>>())
            key=|toast| toast.id
            children=move |toast| {
                let id = toast.id;
                let shown = move || {
                    state.toasts.with(|queue| queue.iter().any(|t| t.id == id && t.shown))
                };
                view! {
                    <div class="toast" class:show=shown>
                        {toast.message}
                    </div>
                }
            }
        />
    }
}
