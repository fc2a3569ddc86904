//! Color theme chrome: load, apply, toggle.
//!
//! The saved choice wins; otherwise the system preference decides. Toggling
//! is also the event source for the epilepsy-warning tracker, wired up in
//! the header.

use parkbound_core::{KeyValueStore, keys};

use crate::storage::LocalStore;

pub const LIGHT: &str = "light";
pub const DARK: &str = "dark";

/// The theme that should be active right now.
#[must_use]
pub fn current_theme(store: &LocalStore) -> String {
    if let Some(saved) = store.get(keys::THEME) {
        return saved;
    }
    if system_prefers_dark() {
        DARK.to_string()
    } else {
        LIGHT.to_string()
    }
}

fn system_prefers_dark() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|win| win.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|query| query.matches())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Set the `data-theme` attribute that the stylesheet keys off.
pub fn apply_theme(theme: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(html) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
    {
        let _ = html.set_attribute("data-theme", theme);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = theme;
    }
}

/// Flip between light and dark, persist, and apply. Returns the new theme.
pub fn toggle_theme(store: &LocalStore) -> String {
    let next = if current_theme(store) == DARK { LIGHT } else { DARK };
    store.set(keys::THEME, next);
    apply_theme(next);
    next.to_string()
}
