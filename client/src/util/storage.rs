//! Durable key-value backends for the preference store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store only talks to `PreferenceStorage`, so its invariants can be
//! exercised natively against `MemoryStorage`. `BrowserStorage` wraps
//! `window.localStorage` in hydrate builds; everywhere else it reports the
//! storage as unavailable and the store falls back to in-memory values.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::PreferenceError;

/// String-keyed durable storage used to persist preferences.
///
/// Every access may fail; callers decide how to degrade.
pub trait PreferenceStorage: Send + Sync {
    /// Read the value stored under `key`, `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Browser `localStorage`, resolved on every call.
///
/// Holding no `web_sys` handle keeps the type `Send + Sync` so it can live
/// inside a Leptos `StoredValue`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl PreferenceStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }
}

#[cfg(not(feature = "hydrate"))]
impl PreferenceStorage for BrowserStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, PreferenceError> {
        Err(outside_browser())
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
        Err(outside_browser())
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, PreferenceError> {
    let window = web_sys::window().ok_or_else(|| PreferenceError::StorageUnavailable("no window".to_owned()))?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(PreferenceError::StorageUnavailable("localStorage is disabled".to_owned())),
        Err(err) => Err(js_error(err)),
    }
}

#[cfg(feature = "hydrate")]
fn js_error(err: wasm_bindgen::JsValue) -> PreferenceError {
    PreferenceError::StorageUnavailable(format!("{err:?}"))
}

#[cfg(not(feature = "hydrate"))]
fn outside_browser() -> PreferenceError {
    PreferenceError::StorageUnavailable("localStorage requires a browser".to_owned())
}

/// Process-local storage. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a storage pre-populated with `entries`.
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Self { entries: Arc::new(Mutex::new(map)) }
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let entries = self.entries.lock().map_err(|_| poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut entries = self.entries.lock().map_err(|_| poisoned())?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

fn poisoned() -> PreferenceError {
    PreferenceError::StorageUnavailable("memory storage lock poisoned".to_owned())
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;
