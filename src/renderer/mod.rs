//! Rendering module
//!
//! The game draws through a [`DrawSurface`] supplied by the host. Coordinates
//! are in screen space: the camera sits at the center of the viewport.

pub mod commands;
pub mod scene;

pub use commands::{CommandBuffer, DrawCall};
pub use scene::{render_world, sky_color};

use glam::Vec2;

use crate::sim::ObstacleKind;

/// Sprite identifiers for the host's image bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Cat,
    Ground,
    Cannon,
    CannonWheel,
    Trampoline,
    Puddle,
    Clew,
}

impl Sprite {
    pub fn for_obstacle(kind: ObstacleKind) -> Self {
        match kind {
            ObstacleKind::Trampoline => Sprite::Trampoline,
            ObstacleKind::Puddle => Sprite::Puddle,
            ObstacleKind::Clew => Sprite::Clew,
        }
    }

    /// Stable asset name for the host's image bank
    pub fn asset_name(&self) -> &'static str {
        match self {
            Sprite::Cat => "cat",
            Sprite::Ground => "ground",
            Sprite::Cannon => "cannon",
            Sprite::CannonWheel => "cannon-wheel",
            Sprite::Trampoline => "trampoline",
            Sprite::Puddle => "puddle",
            Sprite::Clew => "clew",
        }
    }

    pub const ALL: [Sprite; 7] = [
        Sprite::Cat,
        Sprite::Ground,
        Sprite::Cannon,
        Sprite::CannonWheel,
        Sprite::Trampoline,
        Sprite::Puddle,
        Sprite::Clew,
    ];
}

/// A color in HSL (hue in degrees, saturation and lightness in percent)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// CSS color string, e.g. `hsl(180, 100%, 33%)`
    pub fn to_css(&self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// A 2D surface the game can draw sprites on
pub trait DrawSurface {
    /// Start a new frame
    fn clear(&mut self);

    /// Fill everything behind the sprites
    fn fill_background(&mut self, _color: Hsl) {}

    /// Draw `sprite` centered at `center`, scaled to `size`, rotated by
    /// `rotation` radians around its center
    fn draw_sprite(&mut self, sprite: Sprite, center: Vec2, size: Vec2, rotation: f32);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sprite_asset_names_unique() {
        let names: HashSet<_> = Sprite::ALL.iter().map(|s| s.asset_name()).collect();
        assert_eq!(names.len(), Sprite::ALL.len());
    }

    #[test]
    fn test_hsl_css() {
        assert_eq!(Hsl::new(180.0, 100.0, 33.0).to_css(), "hsl(180, 100%, 33%)");
        assert_eq!(Hsl::new(180.0, 100.0, 32.5).to_css(), "hsl(180, 100%, 32.5%)");
    }
}
