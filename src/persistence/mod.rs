//! Named scalar storage
//!
//! The game persists a single number (the best score), so the storage
//! capability is just get/set of named numbers. Writes are fire-and-forget:
//! backends log failures instead of returning them.

use std::collections::HashMap;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStore;
#[cfg(target_arch = "wasm32")]
pub use web::LocalStorageStore;

/// Get/set a named number
pub trait ScalarStore {
    fn get_number(&self, key: &str) -> Option<f64>;
    fn set_number(&mut self, key: &str, value: f64);
}

/// In-memory store, lost on exit
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, f64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScalarStore for MemoryStore {
    fn get_number(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    fn set_number(&mut self, key: &str, value: f64) {
        self.values.insert(key.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_number("bestScore"), None);
        store.set_number("bestScore", 12.0);
        store.set_number("bestScore", 15.0);
        assert_eq!(store.get_number("bestScore"), Some(15.0));
    }
}
