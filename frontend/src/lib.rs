pub mod app;
pub mod components;
pub mod config;
pub mod controllers;
pub mod i18n;
pub mod state;
pub mod utils;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let document = leptos::document();
    if document.ready_state() == "loading" {
        log::debug!("waiting for DOMContentLoaded");
        utils::listen(&document, "DOMContentLoaded", |_| leptos::mount_to_body(app::App));
    } else {
        leptos::mount_to_body(app::App);
    }
}
