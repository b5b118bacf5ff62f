//! World state and lifecycle
//!
//! One `World` lives for the whole process. `start` and `stop` reset it
//! between runs; `tick` advances it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::cannon::Cannon;
use super::cat::Cat;
use super::geometry::random_int;
use super::obstacle::{Obstacle, ObstacleKind};
use crate::audio::SoundEffect;
use crate::consts::*;

/// Current phase of the world
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Constructed or stopped; ticks do nothing
    Idle,
    /// A run is in progress
    Running,
}

/// Side effects the host must carry out after a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Sound(SoundEffect),
    /// A run ended with a new best score that should be persisted
    BestScore(u64),
    /// The idle timer ran out and the run was restarted
    Restarted,
}

/// Obstacle pruning behind the camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PruneConfig {
    pub enabled: bool,
    /// How far behind the camera an obstacle may fall before it is dropped
    pub distance: f32,
}

impl Default for PruneConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            distance: 2048.0,
        }
    }
}

/// Complete world state
#[derive(Debug, Clone)]
pub struct World {
    /// Visible area in world units
    pub viewport: Vec2,
    pub phase: GamePhase,
    pub cat: Cat,
    pub cannon: Cannon,
    /// Live obstacles, ordered by spawn (and so by x)
    pub obstacles: Vec<Obstacle>,
    /// Camera center
    pub camera: Vec2,
    /// Seconds until `land` is usable again
    pub land_cooldown: f32,
    pub score: u64,
    pub best_score: u64,
    /// Seconds the cat's rounded position has not changed
    pub idle_time: f32,
    pub launched: bool,
    pub prune: PruneConfig,
    /// Seeded RNG behind every random draw
    pub rng: Pcg32,
    /// Pending side effects, drained by the host
    pub events: Vec<GameEvent>,
}

impl World {
    /// Create an idle world; call `start` to begin a run
    pub fn new(viewport: Vec2, best_score: u64, seed: u64) -> Self {
        Self {
            viewport,
            phase: GamePhase::Idle,
            cat: Cat::default(),
            cannon: Cannon::new(viewport.y),
            obstacles: Vec::new(),
            camera: Vec2::ZERO,
            land_cooldown: 0.0,
            score: 0,
            best_score,
            idle_time: 0.0,
            launched: false,
            prune: PruneConfig::default(),
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    pub fn with_prune(mut self, prune: PruneConfig) -> Self {
        self.prune = prune;
        self
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Begin a fresh run
    pub fn start(&mut self) {
        self.camera = Vec2::ZERO;
        self.land_cooldown = 0.0;
        self.score = 0;
        self.idle_time = 0.0;
        self.launched = false;
        self.obstacles.clear();
        self.spawn_obstacle(SPAWN_LEAD);
        self.cat.reset();
        self.cannon.reset();
        self.cannon.load(&mut self.cat);
        self.phase = GamePhase::Running;
        log::info!("Run started (best score {})", self.best_score);
    }

    /// End the run, recording a new best score if one was set
    pub fn stop(&mut self) {
        if self.score > self.best_score {
            self.best_score = self.score;
            self.events.push(GameEvent::BestScore(self.best_score));
            log::info!("New best score: {}", self.best_score);
        }
        self.phase = GamePhase::Idle;
        self.obstacles.clear();
        log::info!("Run stopped with score {}", self.score);
    }

    pub fn restart(&mut self) {
        self.stop();
        self.start();
    }

    /// Fire the cat. Ignored once it has been launched this run.
    pub fn launch_cat(&mut self) {
        if self.launched || !self.is_running() {
            return;
        }
        self.launched = true;
        self.cannon.launch(&mut self.cat, &mut self.rng, &mut self.events);
    }

    /// Dive toward the ground. Ignored before launch and during cooldown.
    pub fn land(&mut self) {
        if self.land_cooldown > 0.0 || !self.launched || !self.is_running() {
            return;
        }
        self.events.push(GameEvent::Sound(SoundEffect::Land));
        self.land_cooldown = LAND_COOLDOWN;
        self.cat.vel.y = self.cat.vel.y.max(0.0) + LAND_VELOCITY;
        log::debug!("Land dive, vy={:.0}", self.cat.vel.y);
    }

    /// Append an obstacle of a random kind at world x
    pub fn spawn_obstacle(&mut self, x: f32) {
        let kind = ObstacleKind::random(&mut self.rng);
        log::debug!("Spawned {:?} at x={:.0}", kind, x);
        self.obstacles.push(Obstacle::new(kind, x, self.viewport.y));
    }

    /// Gap to the next obstacle
    pub fn random_gap(&mut self) -> f32 {
        random_int(&mut self.rng, SPAWN_GAP_MIN, SPAWN_GAP_MAX) as f32
    }

    /// Countdown to the idle restart, once the warning threshold is reached
    pub fn idle_countdown(&self) -> Option<u32> {
        if self.is_running() && self.idle_time >= IDLE_WARNING_SECS {
            Some((IDLE_RESTART_SECS - self.idle_time).round().max(0.0) as u32)
        } else {
            None
        }
    }

    pub fn land_available(&self) -> bool {
        self.land_cooldown <= 0.0
    }

    /// Take all pending side effects
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
