//! Simulation module
//!
//! All gameplay logic lives here. This module stays free of capabilities:
//! - Seeded RNG only
//! - Delta-time driven, no clock access
//! - Side effects (sounds, best score) are queued as `GameEvent`s
//! - No rendering, audio or storage dependencies

pub mod cannon;
pub mod cat;
pub mod geometry;
pub mod obstacle;
pub mod state;
pub mod tick;

pub use cannon::Cannon;
pub use cat::Cat;
pub use geometry::{boxes_overlap, distance, random_int};
pub use obstacle::{Obstacle, ObstacleKind};
pub use state::{GameEvent, GamePhase, PruneConfig, World};
pub use tick::{TickInput, tick};
