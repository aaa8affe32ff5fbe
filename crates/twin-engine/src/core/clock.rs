/// Simulation ticks per second. Level countdowns are authored in ticks.
pub const TICKS_PER_SECOND: u32 = 100;

/// Fixed timestep accumulator.
/// Turns variable browser frame times into a whole number of simulation ticks.
pub struct FixedTimestep {
    /// Seconds per tick.
    dt: f64,
    /// Frame time not yet consumed by a tick.
    accumulator: f64,
    /// Most ticks a single frame may run.
    max_steps: u32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt: dt as f64,
            accumulator: 0.0,
            max_steps: 10,
        }
    }

    /// Add frame time. Returns the number of ticks to run this frame.
    /// Backlog beyond `max_steps` ticks is dropped so a stalled tab does not
    /// fast-forward the level when it regains focus.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += (frame_dt as f64).max(0.0);
        let steps = (self.accumulator / self.dt) as u32;
        if steps >= self.max_steps {
            self.accumulator = 0.0;
            return self.max_steps;
        }
        self.accumulator -= steps as f64 * self.dt;
        steps
    }
}

/// Per-level countdown measured in ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn new(ticks: u32) -> Self {
        Self { remaining: ticks }
    }

    /// Consume one tick. Returns true once the countdown has run out.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.expired()
    }

    pub fn expired(&self) -> bool {
        self.remaining == 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whole seconds left, rounded up, for display.
    pub fn display_secs(&self) -> u32 {
        self.remaining.div_ceil(TICKS_PER_SECOND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_tick_exact() {
        let mut ts = FixedTimestep::new(0.01);
        assert_eq!(ts.accumulate(0.0101), 1);
    }

    #[test]
    fn sixty_hz_frame_runs_one_or_two_ticks() {
        let mut ts = FixedTimestep::new(0.01);
        let mut total = 0;
        for _ in 0..60 {
            let steps = ts.accumulate(1.0 / 60.0);
            assert!(steps == 1 || steps == 2, "steps = {}", steps);
            total += steps;
        }
        // one second of frames is about one hundred ticks
        assert!((99..=100).contains(&total), "total = {}", total);
    }

    #[test]
    fn caps_backlog() {
        let mut ts = FixedTimestep::new(0.01);
        assert_eq!(ts.accumulate(5.0), 10);
        assert_eq!(ts.accumulate(0.0), 0);
    }

    #[test]
    fn negative_frame_time_is_ignored() {
        let mut ts = FixedTimestep::new(0.01);
        assert_eq!(ts.accumulate(-1.0), 0);
        assert_eq!(ts.accumulate(0.0101), 1);
    }

    #[test]
    fn countdown_expires_at_zero() {
        let mut c = Countdown::new(2);
        assert!(!c.tick());
        assert!(c.tick());
        assert!(c.expired());
        // stays expired
        assert!(c.tick());
        assert_eq!(c.remaining(), 0);
    }

    #[test]
    fn display_rounds_up() {
        assert_eq!(Countdown::new(4500).display_secs(), 45);
        assert_eq!(Countdown::new(4499).display_secs(), 45);
        assert_eq!(Countdown::new(4401).display_secs(), 45);
        assert_eq!(Countdown::new(4400).display_secs(), 44);
        assert_eq!(Countdown::new(1).display_secs(), 1);
        assert_eq!(Countdown::new(0).display_secs(), 0);
    }
}
