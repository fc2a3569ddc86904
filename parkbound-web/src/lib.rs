#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod console_eggs;
pub mod cosmetics;
pub mod dom;
pub mod pages;
pub mod router;
pub mod storage;
pub mod theme;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Set the theme attribute before first paint so there is no flash.
    let store = storage::LocalStore::new();
    theme::apply_theme(&theme::current_theme(&store));
    yew::Renderer::<app::App>::new().render();
}
