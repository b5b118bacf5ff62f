//! Frame clock
//!
//! Turns monotonic timestamps into the delta seconds the simulation consumes.

/// Milliseconds on a monotonic clock
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Milliseconds on a monotonic clock
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Delta-time source for the update loop
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: f64,
    /// Longest delta handed out, so a stalled tab doesn't teleport the cat
    max_dt: f32,
}

impl FrameClock {
    pub fn new(now_ms: f64, max_dt: f32) -> Self {
        Self {
            last_ms: now_ms,
            max_dt,
        }
    }

    /// Seconds since the previous call, clamped to `[0, max_dt]`
    pub fn delta(&mut self, now_ms: f64) -> f32 {
        let dt = ((now_ms - self.last_ms) / 1000.0) as f32;
        self.last_ms = now_ms;
        dt.clamp(0.0, self.max_dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_seconds() {
        let mut clock = FrameClock::new(1000.0, 0.25);
        assert!((clock.delta(1016.0) - 0.016).abs() < 1e-6);
        assert!((clock.delta(1032.0) - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_delta_clamped() {
        let mut clock = FrameClock::new(0.0, 0.25);
        assert_eq!(clock.delta(5000.0), 0.25);
        // Clock going backwards never yields a negative step
        assert_eq!(clock.delta(4000.0), 0.0);
    }

    #[test]
    fn test_now_is_monotonic() {
        let a = now_ms();
        let b = now_ms();
        assert!(b >= a);
    }
}
