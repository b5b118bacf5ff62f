//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Logger backend
//! - Monotonic time / frame deltas

pub mod time;

pub use time::{FrameClock, now_ms};

/// Install the logger for this platform
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
}

/// Install the logger for this platform
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
