//! LocalStorage backed store for the browser build

use super::ScalarStore;

/// Reads and writes numbers as strings in `window.localStorage`
#[derive(Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

impl ScalarStore for LocalStorageStore {
    fn get_number(&self, key: &str) -> Option<f64> {
        let storage = Self::storage()?;
        let value = storage.get_item(key).ok().flatten()?;
        value.parse().ok()
    }

    fn set_number(&mut self, key: &str, value: f64) {
        let Some(storage) = Self::storage() else {
            log::warn!("LocalStorage unavailable, {} not saved", key);
            return;
        };
        if storage.set_item(key, &value.to_string()).is_err() {
            log::warn!("Failed to save {} to LocalStorage", key);
        }
    }
}
