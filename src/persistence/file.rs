//! JSON file backed store for native builds

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::ScalarStore;

/// Keeps every value in one small JSON object on disk.
///
/// A missing or unreadable file reads as empty; failed writes are logged.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, f64>,
}

impl JsonFileStore {
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(values) => {
                    log::info!("Loaded store from {}", path.display());
                    values
                }
                Err(e) => {
                    log::warn!("Ignoring corrupt store {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(_) => {
                log::info!("No store at {}, starting fresh", path.display());
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) {
        let json = match serde_json::to_string_pretty(&self.values) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to encode store: {}", e);
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, json) {
            log::warn!("Failed to write store {}: {}", self.path.display(), e);
        }
    }
}

impl ScalarStore for JsonFileStore {
    fn get_number(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    fn set_number(&mut self, key: &str, value: f64) {
        self.values.insert(key.to_string(), value);
        self.save();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("cat-cannon-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_round_trip_through_disk() {
        let path = temp_path("roundtrip");
        let _ = fs::remove_file(&path);

        let mut store = JsonFileStore::open(&path);
        assert_eq!(store.get_number("bestScore"), None);
        store.set_number("bestScore", 321.0);

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get_number("bestScore"), Some(321.0));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_reads_empty() {
        let path = temp_path("corrupt");
        fs::write(&path, "not json").unwrap();
        let store = JsonFileStore::open(&path);
        assert_eq!(store.get_number("bestScore"), None);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_unwritable_path_is_absorbed() {
        let dir = std::env::temp_dir().join(format!("cat-cannon-missing-{}", std::process::id()));
        let mut store = JsonFileStore::open(dir.join("nested").join("store.json"));
        store.set_number("bestScore", 5.0);
        // Value still visible in memory even though the write failed
        assert_eq!(store.get_number("bestScore"), Some(5.0));
    }
}
