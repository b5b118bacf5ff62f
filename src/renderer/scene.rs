//! Render pass over the world state
//!
//! Read-only: draws whatever the last update committed, no interpolation.

use glam::Vec2;

use super::{DrawSurface, Hsl, Sprite};
use crate::consts::*;
use crate::polar_to_cartesian;
use crate::sim::{World, boxes_overlap};

/// Sky tint: darkens slowly as the cat climbs
pub fn sky_color(world: &World) -> Hsl {
    Hsl::new(180.0, 100.0, 33.0 - (world.viewport.y - world.cat.pos.y) / 1024.0)
}

/// Draw one frame
pub fn render_world<D: DrawSurface + ?Sized>(world: &World, surface: &mut D) {
    surface.clear();
    surface.fill_background(sky_color(world));

    render_cat(world, surface);
    render_ground(world, surface);
    render_cannon(world, surface);
    render_obstacles(world, surface);
}

/// World position to screen position
#[inline]
fn to_screen(world: &World, pos: Vec2) -> Vec2 {
    pos - world.camera + world.viewport / 2.0
}

/// Whether a box intersects the camera's view
#[inline]
fn on_screen(world: &World, center: Vec2, size: Vec2) -> bool {
    boxes_overlap(center, size, world.camera, world.viewport)
}

fn render_cat<D: DrawSurface + ?Sized>(world: &World, surface: &mut D) {
    surface.draw_sprite(
        Sprite::Cat,
        to_screen(world, world.cat.pos),
        Vec2::new(CAT_WIDTH, CAT_HEIGHT),
        world.cat.heading(),
    );
}

/// Tile the ground strip across the viewport, scrolled by the camera
fn render_ground<D: DrawSurface + ?Sized>(world: &World, surface: &mut D) {
    let (width, height) = (world.viewport.x, world.viewport.y);
    if height / 2.0 - GROUND_HEIGHT - world.camera.y >= 0.0 {
        return;
    }
    let size = Vec2::new(GROUND_WIDTH, GROUND_HEIGHT);
    let top = height * 1.5 - GROUND_HEIGHT - world.camera.y;
    let offset = GROUND_WIDTH + world.camera.x % GROUND_WIDTH;

    let mut x = 0.0;
    while x - offset < width {
        let left = x - offset;
        surface.draw_sprite(Sprite::Ground, Vec2::new(left, top) + size / 2.0, size, 0.0);
        x += GROUND_WIDTH;
    }
}

fn render_cannon<D: DrawSurface + ?Sized>(world: &World, surface: &mut D) {
    let cannon = &world.cannon;
    if !on_screen(world, cannon.pos, Vec2::new(CANNON_WIDTH, CANNON_HEIGHT)) {
        return;
    }
    // The barrel pivots a quarter of its length from the breech
    let barrel_center = cannon.pivot() + polar_to_cartesian(CANNON_WIDTH / 4.0, cannon.aim);
    surface.draw_sprite(
        Sprite::Cannon,
        to_screen(world, barrel_center),
        Vec2::new(CANNON_WIDTH, CANNON_HEIGHT),
        cannon.aim,
    );
    surface.draw_sprite(
        Sprite::CannonWheel,
        to_screen(world, cannon.pos),
        Vec2::new(CANNON_WHEEL_WIDTH, CANNON_WHEEL_HEIGHT),
        0.0,
    );
}

fn render_obstacles<D: DrawSurface + ?Sized>(world: &World, surface: &mut D) {
    for obstacle in &world.obstacles {
        let size = obstacle.kind.size();
        if !on_screen(world, obstacle.pos, size) {
            continue;
        }
        surface.draw_sprite(
            Sprite::for_obstacle(obstacle.kind),
            to_screen(world, obstacle.pos),
            size,
            0.0,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::CommandBuffer;
    use crate::sim::{Obstacle, ObstacleKind};

    fn world() -> World {
        let mut world = World::new(Vec2::new(800.0, 600.0), 0, 5);
        world.start();
        world
    }

    #[test]
    fn test_cat_drawn_at_screen_center() {
        let mut world = world();
        world.cat.pos = Vec2::new(1500.0, 200.0);
        world.camera = world.cat.pos;
        let mut buffer = CommandBuffer::new();
        render_world(&world, &mut buffer);

        let cat: Vec<_> = buffer.of(Sprite::Cat).collect();
        assert_eq!(cat.len(), 1);
        assert_eq!(cat[0].center, Vec2::new(400.0, 300.0));
        assert_eq!(buffer.frames, 1);
        assert!(buffer.background.is_some());
    }

    #[test]
    fn test_cat_faces_current_velocity() {
        let mut world = world();
        world.launch_cat();
        world.cat.vel = Vec2::new(300.0, -300.0);
        // A dive changes the velocity between ticks
        world.land();
        let mut buffer = CommandBuffer::new();
        render_world(&world, &mut buffer);

        let cat: Vec<_> = buffer.of(Sprite::Cat).collect();
        let expected = LAND_VELOCITY.atan2(300.0);
        assert!((cat[0].rotation - expected).abs() < 1e-6);
    }

    #[test]
    fn test_obstacles_culled_outside_view() {
        let mut world = world();
        world.camera = Vec2::new(0.0, 300.0);
        world.obstacles = vec![
            Obstacle::new(ObstacleKind::Clew, 300.0, 600.0),
            Obstacle::new(ObstacleKind::Puddle, 5000.0, 600.0),
        ];
        let mut buffer = CommandBuffer::new();
        render_world(&world, &mut buffer);
        assert_eq!(buffer.count(Sprite::Clew), 1);
        assert_eq!(buffer.count(Sprite::Puddle), 0);
    }

    #[test]
    fn test_ground_covers_viewport() {
        let mut world = world();
        world.camera = Vec2::new(1234.0, 300.0);
        let mut buffer = CommandBuffer::new();
        render_world(&world, &mut buffer);

        let tiles: Vec<_> = buffer.of(Sprite::Ground).collect();
        assert!(!tiles.is_empty());
        let left = tiles
            .iter()
            .map(|t| t.center.x - t.size.x / 2.0)
            .fold(f32::MAX, f32::min);
        let right = tiles
            .iter()
            .map(|t| t.center.x + t.size.x / 2.0)
            .fold(f32::MIN, f32::max);
        assert!(left <= 0.0);
        assert!(right >= 800.0);
        // Ground top sits at the bottom strip of the screen
        assert_eq!(tiles[0].center.y - GROUND_HEIGHT / 2.0, 520.0);
    }

    #[test]
    fn test_ground_hidden_when_high_up() {
        let mut world = world();
        world.camera = Vec2::new(0.0, -1000.0);
        let mut buffer = CommandBuffer::new();
        render_world(&world, &mut buffer);
        assert_eq!(buffer.count(Sprite::Ground), 0);
    }

    #[test]
    fn test_cannon_visible_at_start_only() {
        let mut world = world();
        world.camera = Vec2::new(0.0, 300.0);
        let mut buffer = CommandBuffer::new();
        render_world(&world, &mut buffer);
        assert_eq!(buffer.count(Sprite::Cannon), 1);
        assert_eq!(buffer.count(Sprite::CannonWheel), 1);

        world.camera.x = 3000.0;
        render_world(&world, &mut buffer);
        assert_eq!(buffer.count(Sprite::Cannon), 0);
    }

    #[test]
    fn test_sky_darkens_with_height() {
        let mut world = world();
        world.cat.pos.y = 488.0;
        let low = sky_color(&world).lightness;
        world.cat.pos.y = -20_000.0;
        let high = sky_color(&world).lightness;
        assert!(high < low);
        assert_eq!(sky_color(&world).hue, 180.0);
    }
}
