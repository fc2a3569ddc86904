//! `localStorage`-backed implementation of the engine's store contract.

use parkbound_core::KeyValueStore;

#[cfg(target_arch = "wasm32")]
use web_sys::Storage;

#[cfg(not(target_arch = "wasm32"))]
use std::cell::RefCell;
#[cfg(not(target_arch = "wasm32"))]
use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::rc::Rc;

/// The browser store. On non-wasm targets (server rendering, tests) it
/// degrades to a process-local map so components behave the same way.
#[derive(Clone, Default)]
pub struct LocalStore {
    #[cfg(target_arch = "wasm32")]
    storage: Option<Storage>,
    #[cfg(not(target_arch = "wasm32"))]
    fallback: Rc<RefCell<HashMap<String, String>>>,
}

impl LocalStore {
    #[must_use]
    pub fn new() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window().and_then(|win| win.local_storage().ok().flatten());
            if storage.is_none() {
                log::warn!("localStorage unavailable; achievements will not persist");
            }
            Self { storage }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage
            && let Err(err) = storage.set_item(key, value)
        {
            // Quota or privacy-mode failure: the write is lost, the site
            // keeps working off in-memory state.
            crate::dom::console_error(&format!(
                "localStorage write failed for `{key}`: {}",
                crate::dom::js_error_message(&err)
            ));
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.fallback.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.fallback
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.fallback.borrow_mut().remove(key);
    }
}
