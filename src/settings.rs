//! Game settings
//!
//! Loaded from a JSON file on native builds; every field is optional and
//! falls back to its default.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::PruneConfig;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Viewport ===
    pub viewport_width: f32,
    pub viewport_height: f32,

    // === Simulation ===
    /// Fixed RNG seed for reproducible runs (random when absent)
    pub seed: Option<u64>,
    /// Drop obstacles left far behind the camera
    pub prune_obstacles: bool,
    /// Distance behind the camera at which obstacles are dropped
    pub prune_distance: f32,
    /// Longest frame delta fed to the simulation (seconds)
    pub max_frame_dt: f32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,

    // === Storage ===
    /// Where the native build keeps the best score
    pub store_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,

            seed: None,
            prune_obstacles: true,
            prune_distance: 2048.0,
            max_frame_dt: 0.25,

            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.2,
            muted: false,

            store_path: "cat-cannon.json".to_string(),
        }
    }
}

impl Settings {
    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height)
    }

    pub fn prune_config(&self) -> PruneConfig {
        PruneConfig {
            enabled: self.prune_obstacles,
            distance: self.prune_distance,
        }
    }

    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7, "muted": true }"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert!(settings.muted);
        assert_eq!(settings.viewport(), Vec2::new(800.0, 600.0));
        assert!((settings.music_volume - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Settings::from_json("{ seed: }").is_err());
    }

    #[test]
    fn test_missing_file_is_default() {
        let settings = Settings::load("/definitely/not/here/settings.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_prune_config() {
        let settings = Settings {
            prune_obstacles: false,
            prune_distance: 99.0,
            ..Default::default()
        };
        let prune = settings.prune_config();
        assert!(!prune.enabled);
        assert_eq!(prune.distance, 99.0);
    }
}
