use leptos::*;
use shared::order::{modal_summary, OrderLinks};

use crate::state::use_site_state;

/// Two-choice ordering modal shown from the floating cart button.
#[component]
pub fn OrderModal(count: u32, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let state = use_site_state();
    let links = state.setting(OrderLinks::from_config);
    let tel_uri = links.tel_uri();
    let whatsapp_uri = links.whatsapp_uri();

    let close = move |_| on_close.call(());

    let call = move |_| {
        log::info!("order hand-off: phone");
        if let Err(err) = window().location().set_href(&tel_uri) {
            log::warn!("failed to open {}: {:?}", tel_uri, err);
        }
    };

    let chat = move |_| {
        log::info!("order hand-off: whatsapp");
        if let Err(err) = window().open_with_url_and_target(&whatsapp_uri, "_blank") {
            log::warn!("failed to open {}: {:?}", whatsapp_uri, err);
        }
    };

    view! {
        <div class="order-modal" on:click=close>
            <div class="order-modal__content" on:click=|e| e.stop_propagation()>
                <h3>"Passer Commande"</h3>
                <p>{modal_summary(count)}</p>
                <div class="order-options">
                    <button class="order-btn order-btn--call" on:click=call>
                        <span>"📞"</span>
                        " Commander par Téléphone"
                    </button>
                    <button class="order-btn order-btn--whatsapp" on:click=chat>
                        <span>"💬"</span>
                        " Commander par WhatsApp"
                    </button>
                </div>
                <button class="order-modal__close" on:click=close>"Fermer"</button>
            </div>
        </div>
    }
}
