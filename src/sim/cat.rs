//! The cat: the only physics body in the world

use glam::Vec2;

use super::state::GameEvent;
use crate::audio::SoundEffect;
use crate::consts::*;

/// The cat projectile
#[derive(Debug, Clone, PartialEq)]
pub struct Cat {
    pub pos: Vec2,
    pub vel: Vec2,
    /// While anchored the cannon drives position and rotation
    pub anchored: bool,
    /// Barrel angle the cat was last seated at (radians)
    pub rotation: f32,
}

impl Default for Cat {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            anchored: true,
            rotation: 0.0,
        }
    }
}

impl Cat {
    /// Back into the cannon at the origin
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Size used for every collision test against the cat
    #[inline]
    pub fn size() -> Vec2 {
        Vec2::new(CAT_WIDTH, CAT_HEIGHT)
    }

    /// Resting y of the cat's center for a viewport of the given height
    #[inline]
    pub fn ground_line(viewport_height: f32) -> f32 {
        viewport_height - GROUND_HEIGHT - CAT_HEIGHT / 2.0
    }

    /// Advance the free cat by `dt` seconds (semi-implicit Euler) and bounce
    /// off the ground.
    pub fn integrate(&mut self, dt: f32, ground_line: f32, events: &mut Vec<GameEvent>) {
        if self.anchored {
            return;
        }

        self.vel.y += GRAVITY * dt;
        self.pos += self.vel * dt;

        if self.pos.y > ground_line {
            if self.vel.y > IMPACT_SOUND_SPEED {
                events.push(GameEvent::Sound(SoundEffect::Meow));
            }
            self.pos.y = ground_line;
            self.vel.y = -self.vel.y * GROUND_RESTITUTION;
            self.vel.x *= GROUND_FRICTION;
        }
    }

    /// Sprite rotation: the barrel angle while loaded, else the direction
    /// of travel
    pub fn heading(&self) -> f32 {
        if self.anchored {
            self.rotation
        } else {
            self.vel.y.atan2(self.vel.x)
        }
    }
}
