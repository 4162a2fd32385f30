//! Browser client for the Tibet tourism platform.
//!
//! Compiles to WASM for the browser (CSR) and natively for host-side tests,
//! where views render through the SSR path and HTTP goes against a mock
//! server.

rust_i18n::i18n!("locales", fallback = "zh");

pub mod api;
pub mod components;
pub mod config;
pub mod i18n;
pub mod pages;
pub mod router;
pub mod session;
pub mod state;
pub mod utils;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    i18n::init(&session::BrowserStore);

    // The API base URL may come from a config.json fetch; resolve it before
    // the first page fires its requests.
    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
        router::mount_app();
    });
}
