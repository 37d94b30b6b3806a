/// Update rate the friction coefficient is normed against, in Hz.
pub const FRICTION_REFERENCE_RATE: f32 = 100.0;

/// Per-tick friction decrement derived from a per-second coefficient.
///
/// The coefficient is expressed "per second at the reference rate", so at
/// `ticks_per_second == 100` this returns `friction_per_second` unchanged.
/// Every "at rest" comparison in the crate is made against this value:
/// the same constant drives deceleration and rest detection, which is why
/// it must be derived here and not replaced with a round epsilon.
pub fn friction_per_tick(friction_per_second: f32, ticks_per_second: f32) -> f32 {
    1.0 - (1.0 - friction_per_second).powf(FRICTION_REFERENCE_RATE / ticks_per_second)
}

/// Fixed timestep accumulator for external drivers.
/// Converts variable frame deltas into a whole number of simulation ticks
/// so the table always advances at its configured rate.
pub struct TickClock {
    /// Seconds per simulation tick.
    dt: f32,
    /// Unspent frame time carried between calls.
    accumulator: f32,
    /// Total ticks handed out since construction.
    ticks: u64,
}

impl TickClock {
    pub fn new(ticks_per_second: f32) -> Self {
        Self {
            dt: 1.0 / ticks_per_second,
            accumulator: 0.0,
            ticks: 0,
        }
    }

    /// Add frame time. Returns the number of fixed ticks the driver should
    /// run now. Capped at 10 ticks per call so a long stall cannot snowball.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        self.ticks += steps as u64;
        steps
    }

    /// Seconds per tick.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Total ticks handed out so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn friction_collapses_at_reference_rate() {
        let f = friction_per_tick(0.015, 100.0);
        assert!((f - 0.015).abs() < 1e-6, "expected 0.015, got {}", f);
    }

    #[test]
    fn friction_shrinks_at_higher_tick_rates() {
        let at_100 = friction_per_tick(0.015, 100.0);
        let at_200 = friction_per_tick(0.015, 200.0);
        assert!(
            at_200 < at_100,
            "more ticks per second must mean less decay per tick: {} vs {}",
            at_200,
            at_100
        );
        // Two 200 Hz ticks must decay the same as one 100 Hz tick.
        let two_small = (1.0 - at_200) * (1.0 - at_200);
        assert!(((1.0 - at_100) - two_small).abs() < 1e-6);
    }

    #[test]
    fn one_tick_exact() {
        let mut clock = TickClock::new(100.0);
        assert_eq!(clock.accumulate(0.01), 1);
        assert_eq!(clock.ticks(), 1);
    }

    #[test]
    fn accumulates_partial_frames() {
        let mut clock = TickClock::new(100.0);
        assert_eq!(clock.accumulate(0.004), 0);
        assert_eq!(clock.accumulate(0.007), 1);
    }

    #[test]
    fn caps_at_ten_ticks() {
        let mut clock = TickClock::new(100.0);
        assert_eq!(clock.accumulate(5.0), 10);
    }
}
