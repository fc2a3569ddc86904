//! Key-value persistence contract and helpers.
//!
//! The engine never talks to the browser directly. Everything it remembers
//! goes through [`KeyValueStore`], which the web crate backs with
//! `localStorage` and the tests back with [`MemoryStore`].

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Synchronous, origin-scoped string store.
///
/// Callers treat a missing or malformed value as the documented default for
/// that key, never as an error. Write failures in an implementation are
/// logged and swallowed; the engine has no retry story because every
/// operation is local.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store used by tests and native tooling.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Read a JSON-valued key, falling back to `T::default()` when the key is
/// absent or fails to parse. Parse failures are logged; a corrupt fact is
/// indistinguishable from a missing one by design of the persistence layer.
pub fn read_json<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    match store.get(key) {
        None => T::default(),
        Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
            log::warn!("discarding malformed value for `{key}`: {err}");
            T::default()
        }),
    }
}

/// Serialize and persist a JSON-valued key.
pub fn write_json<T, S>(store: &S, key: &str, value: &T)
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    match serde_json::to_string(value) {
        Ok(raw) => store.set(key, &raw),
        Err(err) => log::warn!("failed to serialize value for `{key}`: {err}"),
    }
}

/// Read a plain boolean flag stored as `"true"` / `"false"`. Absent -> false.
pub fn read_flag<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> bool {
    store.get(key).as_deref() == Some("true")
}

/// Latch a boolean flag on. Latched facts are never un-set by trackers.
pub fn latch_flag<S: KeyValueStore + ?Sized>(store: &S, key: &str) {
    store.set(key, "true");
}

/// Preference flags default to *enabled*: only an explicit `"false"` turns
/// a cosmetic off once its owning achievement is unlocked.
pub fn pref_enabled<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> bool {
    store.get(key).as_deref() != Some("false")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_default() {
        let store = MemoryStore::new();
        let value: Vec<usize> = read_json(&store, "absent");
        assert!(value.is_empty());
        assert!(!read_flag(&store, "absent"));
        assert!(pref_enabled(&store, "absent"));
    }

    #[test]
    fn malformed_json_reads_as_default() {
        let store = MemoryStore::new();
        store.set("broken", "{not json");
        let value: Vec<usize> = read_json(&store, "broken");
        assert!(value.is_empty());
    }

    #[test]
    fn json_round_trip() {
        let store = MemoryStore::new();
        write_json(&store, "list", &vec![3usize, 1, 4]);
        let value: Vec<usize> = read_json(&store, "list");
        assert_eq!(value, vec![3, 1, 4]);
    }

    #[test]
    fn latch_and_pref_semantics() {
        let store = MemoryStore::new();
        latch_flag(&store, "seen");
        assert!(read_flag(&store, "seen"));
        store.set("pref", "false");
        assert!(!pref_enabled(&store, "pref"));
        store.set("pref", "true");
        assert!(pref_enabled(&store, "pref"));
    }
}
