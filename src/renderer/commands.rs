//! Recording draw surface
//!
//! Stores the draw calls of the last frame instead of rasterizing them.
//! Used by the headless native build and by tests.

use glam::Vec2;

use super::{DrawSurface, Hsl, Sprite};

/// One recorded sprite draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub sprite: Sprite,
    pub center: Vec2,
    pub size: Vec2,
    pub rotation: f32,
}

/// Draw calls of the current frame
#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    pub calls: Vec<DrawCall>,
    pub background: Option<Hsl>,
    /// Frames started so far
    pub frames: u64,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls that drew the given sprite
    pub fn of(&self, sprite: Sprite) -> impl Iterator<Item = &DrawCall> {
        self.calls.iter().filter(move |c| c.sprite == sprite)
    }

    pub fn count(&self, sprite: Sprite) -> usize {
        self.of(sprite).count()
    }
}

impl DrawSurface for CommandBuffer {
    fn clear(&mut self) {
        self.calls.clear();
        self.background = None;
        self.frames += 1;
    }

    fn fill_background(&mut self, color: Hsl) {
        self.background = Some(color);
    }

    fn draw_sprite(&mut self, sprite: Sprite, center: Vec2, size: Vec2, rotation: f32) {
        self.calls.push(DrawCall {
            sprite,
            center,
            size,
            rotation,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_starts_new_frame() {
        let mut buffer = CommandBuffer::new();
        buffer.draw_sprite(Sprite::Cat, Vec2::ZERO, Vec2::ONE, 0.0);
        buffer.fill_background(Hsl::new(180.0, 100.0, 30.0));
        assert_eq!(buffer.count(Sprite::Cat), 1);

        buffer.clear();
        assert!(buffer.calls.is_empty());
        assert!(buffer.background.is_none());
        assert_eq!(buffer.frames, 1);
    }
}
