//! Variable timestep simulation tick
//!
//! Advances the world by the wall-clock delta since the previous frame.

use super::cat::Cat;
use super::geometry::distance;
use super::state::{GameEvent, World};
use crate::consts::*;
use crate::round_position;

/// One-shot inputs for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Fire the cannon (click/tap)
    pub launch: bool,
    /// Landing dive (land button)
    pub land: bool,
}

/// Advance the world by `dt` seconds
pub fn tick(world: &mut World, input: &TickInput, dt: f32) {
    if !world.is_running() {
        return;
    }

    if input.launch {
        world.launch_cat();
    }
    if input.land {
        world.land();
    }

    world.land_cooldown = (world.land_cooldown - dt).max(0.0);

    let previous = round_position(world.cat.pos);

    world.cannon.update(dt, world.launched, &mut world.cat);
    world
        .cat
        .integrate(dt, Cat::ground_line(world.viewport.y), &mut world.events);
    update_camera(world);
    update_score(world);
    update_obstacles(world);

    if round_position(world.cat.pos) == previous {
        world.idle_time += dt;
        if world.idle_time >= IDLE_RESTART_SECS {
            log::info!("Cat idle for {:.1}s, restarting", world.idle_time);
            world.restart();
            world.events.push(GameEvent::Restarted);
        }
    } else {
        world.idle_time = 0.0;
    }
}

/// Follow the cat horizontally; vertically stop where the ground stays in view
fn update_camera(world: &mut World) {
    world.camera.x = world.cat.pos.x;
    world.camera.y = world.cat.pos.y.min(world.viewport.y / 2.0);
}

/// Score is the furthest distance reached this run
fn update_score(world: &mut World) {
    let distance = (world.cat.pos.x / SCORE_SCALE).round().max(0.0) as u64;
    world.score = world.score.max(distance);
}

/// Update nearby obstacles, drop ones far behind, and keep the stream
/// filled ahead of the camera.
pub(crate) fn update_obstacles(world: &mut World) {
    for obstacle in world.obstacles.iter_mut() {
        if distance(world.cat.pos, obstacle.pos) <= UPDATE_DISTANCE {
            obstacle.update(&mut world.cat, &mut world.rng, &mut world.events);
        }
    }

    prune_obstacles(world);

    let Some(last_x) = world.obstacles.last().map(|o| o.pos.x) else {
        return;
    };
    if last_x - world.camera.x - world.viewport.x / 2.0 < 0.0 {
        let x = last_x + world.random_gap();
        world.spawn_obstacle(x);
    }
}

/// Remove obstacles well behind the camera. The furthest one always stays so
/// the spawner has something to measure from.
fn prune_obstacles(world: &mut World) {
    if !world.prune.enabled || world.obstacles.len() < 2 {
        return;
    }
    let cutoff = world.camera.x - world.prune.distance;
    let keep_from = world.obstacles[..world.obstacles.len() - 1]
        .iter()
        .position(|o| o.pos.x >= cutoff)
        .unwrap_or(world.obstacles.len() - 1);
    if keep_from > 0 {
        world.obstacles.drain(..keep_from);
        log::debug!("Pruned {} obstacles behind x={:.0}", keep_from, cutoff);
    }
}
