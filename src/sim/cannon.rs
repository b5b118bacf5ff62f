//! The cannon: sweeps its barrel until the cat is fired

use glam::Vec2;
use rand::Rng;

use super::cat::Cat;
use super::geometry::random_unit;
use super::state::GameEvent;
use crate::audio::SoundEffect;
use crate::consts::*;
use crate::polar_to_cartesian;

/// The launcher. Its position is fixed; only the aim changes.
#[derive(Debug, Clone)]
pub struct Cannon {
    /// Wheel center
    pub pos: Vec2,
    /// Barrel angle (radians), always within `[AIM_MIN, AIM_MAX]`
    pub aim: f32,
    /// Sweep direction, -1.0 (raising) or 1.0 (lowering)
    pub sweep: f32,
}

impl Cannon {
    pub fn new(viewport_height: f32) -> Self {
        Self {
            pos: Vec2::new(
                -CANNON_WIDTH,
                viewport_height - GROUND_HEIGHT - CANNON_WHEEL_HEIGHT / 4.0,
            ),
            aim: 0.0,
            sweep: -1.0,
        }
    }

    pub fn reset(&mut self) {
        self.aim = 0.0;
        self.sweep = -1.0;
    }

    /// Point the barrel rotates around
    #[inline]
    pub fn pivot(&self) -> Vec2 {
        Vec2::new(self.pos.x, self.pos.y - CANNON_HEIGHT / 4.0)
    }

    /// Sweep the barrel and carry the loaded cat along the muzzle arc.
    /// Frozen once the cat has been launched.
    pub fn update(&mut self, dt: f32, launched: bool, cat: &mut Cat) {
        if launched {
            return;
        }

        self.aim += AIM_SWEEP_SPEED * dt * self.sweep;
        if self.sweep < 0.0 && self.aim <= AIM_MIN {
            self.aim = AIM_MIN;
            self.sweep = 1.0;
        } else if self.sweep > 0.0 && self.aim >= AIM_MAX {
            self.aim = AIM_MAX;
            self.sweep = -1.0;
        }

        self.load(cat);
    }

    /// Seat the cat in the muzzle at the current aim
    pub fn load(&self, cat: &mut Cat) {
        cat.rotation = self.aim;
        cat.pos = polar_to_cartesian(MUZZLE_RADIUS, self.aim) + self.pivot();
    }

    /// Fire: free the cat along the barrel at a randomized power
    pub fn launch<R: Rng + ?Sized>(&self, cat: &mut Cat, rng: &mut R, events: &mut Vec<GameEvent>) {
        events.push(GameEvent::Sound(SoundEffect::Cannon));
        cat.anchored = false;
        let multiplier = LAUNCH_POWER_MAX - random_unit(rng) * LAUNCH_POWER_SPREAD;
        cat.vel = polar_to_cartesian(CANNON_VELOCITY * multiplier, self.aim);
        log::debug!(
            "Cat launched at {:.1}° with power {:.2}",
            self.aim.to_degrees(),
            multiplier
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_reset() {
        let mut cannon = Cannon::new(600.0);
        cannon.aim = -1.0;
        cannon.sweep = 1.0;
        cannon.reset();
        assert_eq!(cannon.aim, 0.0);
        assert_eq!(cannon.sweep, -1.0);
    }

    #[test]
    fn test_load_seats_cat_at_muzzle() {
        let cannon = Cannon::new(600.0);
        let mut cat = Cat::default();
        cannon.load(&mut cat);
        // Pivot (-128, 484) plus the muzzle radius along the level barrel
        assert_eq!(cat.pos, Vec2::new(-16.0, 484.0));
        assert_eq!(cat.rotation, 0.0);
    }

    #[test]
    fn test_sweep_flips_at_top() {
        let mut cannon = Cannon::new(600.0);
        let mut cat = Cat::default();
        // Two seconds at π/4 rad/s reaches -π/2
        cannon.update(2.0, false, &mut cat);
        assert_eq!(cannon.aim, AIM_MIN);
        assert_eq!(cannon.sweep, 1.0);
        cannon.update(1.0, false, &mut cat);
        assert!((cannon.aim - (AIM_MIN + AIM_SWEEP_SPEED)).abs() < 1e-6);
        cannon.update(1.5, false, &mut cat);
        assert_eq!(cannon.aim, AIM_MAX);
        assert_eq!(cannon.sweep, -1.0);
    }

    #[test]
    fn test_carries_cat_on_muzzle_arc() {
        let mut cannon = Cannon::new(600.0);
        let mut cat = Cat::default();
        cannon.update(0.5, false, &mut cat);
        assert_eq!(cat.rotation, cannon.aim);
        let offset = cat.pos - cannon.pivot();
        assert!((offset.length() - MUZZLE_RADIUS).abs() < 1e-3);
        assert!(offset.y < 0.0);
    }

    #[test]
    fn test_frozen_after_launch() {
        let mut cannon = Cannon::new(600.0);
        let mut cat = Cat::default();
        cannon.update(0.5, false, &mut cat);
        let aim = cannon.aim;
        let pos = cat.pos;
        cannon.update(0.5, true, &mut cat);
        assert_eq!(cannon.aim, aim);
        assert_eq!(cat.pos, pos);
    }

    #[test]
    fn test_launch_flat() {
        let cannon = Cannon::new(600.0);
        let mut cat = Cat::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut events = Vec::new();
        cannon.launch(&mut cat, &mut rng, &mut events);
        assert!(!cat.anchored);
        assert!(cat.vel.x >= 0.75 * CANNON_VELOCITY && cat.vel.x <= 1.25 * CANNON_VELOCITY);
        assert!(cat.vel.y.abs() < 1e-3);
        assert_eq!(events, vec![GameEvent::Sound(SoundEffect::Cannon)]);
    }

    #[test]
    fn test_launch_straight_up() {
        let mut cannon = Cannon::new(600.0);
        cannon.aim = AIM_MIN;
        let mut cat = Cat::default();
        let mut rng = Pcg32::seed_from_u64(5);
        cannon.launch(&mut cat, &mut rng, &mut Vec::new());
        assert!(cat.vel.x.abs() < 1e-2);
        assert!(cat.vel.y <= -0.75 * CANNON_VELOCITY);
    }

    proptest! {
        #[test]
        fn aim_stays_in_arc(steps in proptest::collection::vec(0.0f32..0.5, 1..200)) {
            let mut cannon = Cannon::new(600.0);
            let mut cat = Cat::default();
            for dt in steps {
                let before = cannon.sweep;
                cannon.update(dt, false, &mut cat);
                prop_assert!(cannon.aim >= AIM_MIN && cannon.aim <= AIM_MAX);
                // Direction only ever changes at a boundary
                if cannon.sweep != before {
                    prop_assert!(cannon.aim == AIM_MIN || cannon.aim == AIM_MAX);
                }
            }
        }
    }
}
