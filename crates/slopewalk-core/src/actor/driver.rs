//! Fixed-timestep driver: the per-actor accumulator that keeps the
//! simulation frame-exact at 60 Hz and degrades gracefully under jank
//! (§5 "Fixed-timestep driver").

use crate::constants::FIXED_DT;

/// Per-actor wall-clock bookkeeping for the fixed-timestep driver.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Driver {
    pub reference_time: f32,
    pub fixed_time: f32,
}

impl Driver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulates `dt` and decides the `dt'` the simulation body should
    /// run with this call: the fixed `1/60` while running ahead of real
    /// time (sub-real-time fidelity), or the real `dt` once behind
    /// (degraded mode), never both in the same call.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.reference_time += dt;
        if self.reference_time <= self.fixed_time + FIXED_DT {
            self.fixed_time += FIXED_DT;
            FIXED_DT
        } else {
            self.fixed_time = self.reference_time;
            dt
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_real_time_uses_fixed_dt() {
        let mut driver = Driver::new();
        let dt = driver.advance(1.0 / 120.0);
        assert_eq!(dt, FIXED_DT);
    }

    #[test]
    fn test_degraded_mode_uses_real_dt_after_falling_behind() {
        let mut driver = Driver::new();
        // Run several fixed frames to catch fixed_time up, then submit a
        // large dt that outruns it.
        for _ in 0..5 {
            driver.advance(FIXED_DT);
        }
        let dt = driver.advance(0.5);
        assert_eq!(dt, 0.5);
    }

    #[test]
    fn test_sixty_fps_real_time_stays_in_fixed_mode() {
        let mut driver = Driver::new();
        for _ in 0..120 {
            let dt = driver.advance(FIXED_DT);
            assert_eq!(dt, FIXED_DT);
        }
    }
}
