//! Geometry and randomness helpers shared by the simulation

use glam::Vec2;
use rand::Rng;

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    let d = a - b;
    (d.x * d.x + d.y * d.y).sqrt()
}

/// Axis-aligned overlap test between two boxes given by center and size.
///
/// Touching edges count as overlapping. The test is discrete, so a fast body
/// can pass through a thin box between two frames.
#[inline]
pub fn boxes_overlap(a_center: Vec2, a_size: Vec2, b_center: Vec2, b_size: Vec2) -> bool {
    (a_center.x - b_center.x).abs() <= (a_size.x + b_size.x) / 2.0
        && (a_center.y - b_center.y).abs() <= (a_size.y + b_size.y) / 2.0
}

/// Uniform integer in `[min, max]` (both inclusive)
#[inline]
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    rng.random_range(min..=max)
}

/// Uniform float in `[0, 1)`
#[inline]
pub fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random::<f32>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_distance() {
        assert!((distance(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)) - 5.0).abs() < 1e-6);
        assert_eq!(distance(Vec2::new(2.0, 2.0), Vec2::new(2.0, 2.0)), 0.0);
    }

    #[test]
    fn test_boxes_overlap() {
        let size = Vec2::new(10.0, 10.0);
        assert!(boxes_overlap(Vec2::ZERO, size, Vec2::new(5.0, 5.0), size));
        // Edges touching
        assert!(boxes_overlap(Vec2::ZERO, size, Vec2::new(10.0, 0.0), size));
        assert!(!boxes_overlap(Vec2::ZERO, size, Vec2::new(10.1, 0.0), size));
        // Overlapping on x only
        assert!(!boxes_overlap(Vec2::ZERO, size, Vec2::new(0.0, 20.0), size));
    }

    #[test]
    fn test_boxes_overlap_uneven_sizes() {
        let wide = Vec2::new(100.0, 4.0);
        let small = Vec2::new(2.0, 2.0);
        assert!(boxes_overlap(Vec2::ZERO, wide, Vec2::new(50.0, 2.0), small));
        assert!(!boxes_overlap(Vec2::ZERO, wide, Vec2::new(52.0, 0.0), small));
    }

    #[test]
    fn test_random_int_inclusive_bounds() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..1000 {
            let v = random_int(&mut rng, 0, 2);
            assert!((0..=2).contains(&v));
            seen_min |= v == 0;
            seen_max |= v == 2;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn test_random_unit_range() {
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..1000 {
            let v = random_unit(&mut rng);
            assert!((0.0..1.0).contains(&v));
        }
    }
}
