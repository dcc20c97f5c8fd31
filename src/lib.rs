#![allow(non_snake_case)]

pub mod api;
pub mod components;
pub mod services;

mod app;

pub use app::App;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    let _ = console_log::init_with_level(log::Level::Info);
    console_error_panic_hook::set_once();

    log::info!("Starting Knowledge Assistant Frontend");

    leptos::mount::mount_to_body(app::App);
}
