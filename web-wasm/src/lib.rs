//! Recipe Browser Web App (Leptos + WASM)

mod app;
pub mod components;
mod logger;
pub mod api;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    leptos::mount::mount_to_body(app::App);
}
