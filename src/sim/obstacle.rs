//! Obstacles streamed along the ground
//!
//! Three fixed kinds, each with its own response to touching the cat:
//! - Trampoline: strong upward bounce, once per contact
//! - Puddle: slows the cat every frame it stays in the water
//! - Clew: a ball of yarn that boosts the cat forward, once per contact

use glam::Vec2;
use rand::Rng;

use super::cat::Cat;
use super::geometry::{boxes_overlap, random_int, random_unit};
use super::state::GameEvent;
use crate::audio::{SPLASH_SOUNDS, SoundEffect, TRAMPOLINE_SOUNDS};
use crate::consts::*;

/// Base upward speed a trampoline gives
const TRAMPOLINE_FORCE: f32 = 512.0;
/// Extra sideways nudge range on a trampoline bounce
const TRAMPOLINE_NUDGE: (i32, i32) = (4, 8);
/// Fraction of incoming fall speed carried into the bounce (minus up to the jitter)
const TRAMPOLINE_CARRY: f32 = 0.9;
const TRAMPOLINE_CARRY_JITTER: f32 = 0.2;

/// Per-frame damping inside a puddle
const PUDDLE_DRAG_X: f32 = 0.4;
const PUDDLE_DRAG_Y: f32 = 0.2;

/// Clew boost: forward speed range and lift
const CLEW_BOOST: (i32, i32) = (256, 512);
const CLEW_LIFT: f32 = 128.0;
const CLEW_CARRY: f32 = 0.8;

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    Trampoline,
    Puddle,
    Clew,
}

impl ObstacleKind {
    /// Every kind, in spawn-table order
    pub const ALL: [ObstacleKind; 3] = [
        ObstacleKind::Trampoline,
        ObstacleKind::Puddle,
        ObstacleKind::Clew,
    ];

    /// Pick a kind uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[random_int(rng, 0, Self::ALL.len() as i32 - 1) as usize]
    }

    /// Sprite size
    pub fn size(&self) -> Vec2 {
        match self {
            ObstacleKind::Trampoline => Vec2::new(TRAMPOLINE_WIDTH, TRAMPOLINE_HEIGHT),
            ObstacleKind::Puddle => Vec2::new(PUDDLE_WIDTH, PUDDLE_HEIGHT),
            ObstacleKind::Clew => Vec2::new(CLEW_WIDTH, CLEW_HEIGHT),
        }
    }

    /// Box tested against the cat. Trampolines and puddles reach twice
    /// their height so a cat skimming the ground still registers.
    pub fn hitbox(&self) -> Vec2 {
        match self {
            ObstacleKind::Trampoline | ObstacleKind::Puddle => self.size() * Vec2::new(1.0, 2.0),
            ObstacleKind::Clew => self.size(),
        }
    }

    /// Center y for a viewport of the given height
    pub fn rest_y(&self, viewport_height: f32) -> f32 {
        let ground_top = viewport_height - GROUND_HEIGHT;
        match self {
            ObstacleKind::Trampoline => ground_top - TRAMPOLINE_HEIGHT / 3.0,
            // Sunk into the ground
            ObstacleKind::Puddle => ground_top + PUDDLE_HEIGHT / 2.0,
            ObstacleKind::Clew => ground_top - CLEW_HEIGHT / 2.0,
        }
    }

    /// Whether the effect fires only when contact begins
    pub fn edge_triggered(&self) -> bool {
        !matches!(self, ObstacleKind::Puddle)
    }
}

/// A placed obstacle. Never moves once spawned.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub pos: Vec2,
    /// Whether the cat overlapped on the previous update
    pub colliding: bool,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, x: f32, viewport_height: f32) -> Self {
        Self {
            kind,
            pos: Vec2::new(x, kind.rest_y(viewport_height)),
            colliding: false,
        }
    }

    /// Test against the cat and apply this obstacle's effect
    pub fn update<R: Rng + ?Sized>(&mut self, cat: &mut Cat, rng: &mut R, events: &mut Vec<GameEvent>) {
        let touching = boxes_overlap(cat.pos, Cat::size(), self.pos, self.kind.hitbox());
        let entered = touching && !self.colliding;

        match self.kind {
            ObstacleKind::Trampoline if entered => {
                let variant = random_int(rng, 0, TRAMPOLINE_SOUNDS as i32 - 1) as u8;
                events.push(GameEvent::Sound(SoundEffect::Trampoline(variant)));
                cat.vel.x += random_int(rng, TRAMPOLINE_NUDGE.0, TRAMPOLINE_NUDGE.1) as f32;
                let carry = TRAMPOLINE_CARRY - random_unit(rng) * TRAMPOLINE_CARRY_JITTER;
                cat.vel.y = -TRAMPOLINE_FORCE - cat.vel.y.max(0.0) * carry;
                log::debug!("Trampoline at x={:.0} bounced cat to vy={:.0}", self.pos.x, cat.vel.y);
            }
            ObstacleKind::Puddle if touching => {
                let variant = random_int(rng, 0, SPLASH_SOUNDS as i32 - 1) as u8;
                events.push(GameEvent::Sound(SoundEffect::Splash(variant)));
                cat.vel.x *= PUDDLE_DRAG_X;
                cat.vel.y *= PUDDLE_DRAG_Y;
            }
            ObstacleKind::Clew if entered => {
                events.push(GameEvent::Sound(SoundEffect::HappyMeow));
                cat.vel.x = random_int(rng, CLEW_BOOST.0, CLEW_BOOST.1) as f32 + cat.vel.x.max(0.0);
                cat.vel.y = -CLEW_LIFT - cat.vel.y.max(0.0) * CLEW_CARRY;
                log::debug!("Clew at x={:.0} boosted cat to vx={:.0}", self.pos.x, cat.vel.x);
            }
            _ => {}
        }

        if self.kind.edge_triggered() {
            self.colliding = touching;
        }
    }
}
