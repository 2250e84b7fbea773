pub mod app;
pub mod layout;
pub mod shared;
pub mod usecases;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    // адрес сервера инференса нужен до первого рендера
    wasm_bindgen_futures::spawn_local(async {
        let api_base = shared::api_utils::resolve_api_base().await;
        log::info!("inference server: {}", api_base);
        app::mount(api_base);
    });
}
