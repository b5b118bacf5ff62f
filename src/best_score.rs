//! Best score persistence
//!
//! Stored as a single number under [`BEST_SCORE_KEY`].

use crate::persistence::ScalarStore;

/// Storage key for the best score
pub const BEST_SCORE_KEY: &str = "bestScore";

/// Read the best score, treating missing or invalid values as zero
pub fn load<S: ScalarStore + ?Sized>(store: &S) -> u64 {
    match store.get_number(BEST_SCORE_KEY) {
        Some(value) if value.is_finite() && value >= 0.0 => {
            log::info!("Loaded best score {}", value);
            value.round() as u64
        }
        Some(value) => {
            log::warn!("Ignoring invalid best score {}", value);
            0
        }
        None => {
            log::info!("No best score found, starting fresh");
            0
        }
    }
}

/// Persist a new best score
pub fn save<S: ScalarStore + ?Sized>(store: &mut S, score: u64) {
    store.set_number(BEST_SCORE_KEY, score as f64);
    log::info!("Best score saved ({})", score);
}
