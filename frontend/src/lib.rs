use wasm_bindgen::prelude::wasm_bindgen;

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;

#[cfg(test)]
mod test_support;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("Starting registration frontend (wasm)");

    app::mount_app();
}
