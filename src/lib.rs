//! Cat Cannon - launch a cat, bounce it as far as it will go
//!
//! Core modules:
//! - `sim`: Seeded simulation (cat physics, cannon, obstacles, world streaming)
//! - `renderer`: Drawing-surface capability and the render pass
//! - `persistence`: Named scalar storage (best score)
//! - `platform`: Logger setup and frame clock
//! - `session`: Wires the simulation to audio, storage and rendering
//! - `web`: Browser host (wasm32 only)

pub mod audio;
pub mod best_score;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use session::{Hud, Session};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use std::f32::consts::PI;

    /// Downward acceleration applied to the free cat (pixels/s²)
    pub const GRAVITY: f32 = 256.0;
    /// Base muzzle speed of the cannon (pixels/s)
    pub const CANNON_VELOCITY: f32 = 768.0;
    /// Downward speed added by a landing dive (pixels/s)
    pub const LAND_VELOCITY: f32 = 512.0;
    /// Seconds before the land action is available again
    pub const LAND_COOLDOWN: f32 = 12.0;
    /// Obstacles further than this from the cat are not updated
    pub const UPDATE_DISTANCE: f32 = 256.0;

    /// Sprite dimensions
    pub const CAT_WIDTH: f32 = 64.0;
    pub const CAT_HEIGHT: f32 = 64.0;
    pub const GROUND_WIDTH: f32 = 320.0;
    pub const GROUND_HEIGHT: f32 = 80.0;
    pub const CANNON_WHEEL_WIDTH: f32 = 80.0;
    pub const CANNON_WHEEL_HEIGHT: f32 = 80.0;
    pub const CANNON_WIDTH: f32 = 128.0;
    pub const CANNON_HEIGHT: f32 = 64.0;
    pub const TRAMPOLINE_WIDTH: f32 = 80.0;
    pub const TRAMPOLINE_HEIGHT: f32 = 40.0;
    pub const PUDDLE_WIDTH: f32 = 128.0;
    pub const PUDDLE_HEIGHT: f32 = 32.0;
    pub const CLEW_WIDTH: f32 = 48.0;
    pub const CLEW_HEIGHT: f32 = 48.0;

    /// Ground bounce: vertical restitution and horizontal friction
    pub const GROUND_RESTITUTION: f32 = 0.5;
    pub const GROUND_FRICTION: f32 = 0.8;
    /// Landing faster than this (pixels/s) makes the cat meow
    pub const IMPACT_SOUND_SPEED: f32 = 8.0;

    /// Cannon sweep speed (radians/s) and arc limit
    pub const AIM_SWEEP_SPEED: f32 = PI / 4.0;
    pub const AIM_MIN: f32 = -PI / 2.0;
    pub const AIM_MAX: f32 = 0.0;
    /// Distance from the barrel pivot to the loaded cat
    pub const MUZZLE_RADIUS: f32 = CANNON_WIDTH / 2.0 + CAT_HEIGHT * 0.75;
    /// Launch power multiplier is drawn from (MAX - SPREAD, MAX]
    pub const LAUNCH_POWER_MAX: f32 = 1.25;
    pub const LAUNCH_POWER_SPREAD: f32 = 0.5;

    /// Idle seconds before the restart countdown shows, and before restart
    pub const IDLE_WARNING_SECS: f32 = 2.0;
    pub const IDLE_RESTART_SECS: f32 = 7.0;

    /// World x of the first obstacle of a run
    pub const SPAWN_LEAD: f32 = 768.0;
    /// Gap between consecutive obstacles (inclusive range)
    pub const SPAWN_GAP_MIN: i32 = 512;
    pub const SPAWN_GAP_MAX: i32 = 1024;

    /// Score is distance in pixels divided by this
    pub const SCORE_SCALE: f32 = 10.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Round a position to whole pixels on both axes
#[inline]
pub fn round_position(pos: Vec2) -> (i64, i64) {
    (pos.x.round() as i64, pos.y.round() as i64)
}
