use serde::Serialize;

/// Progress through one run, from Start until the menu.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunStats {
    /// Current level number (1-based).
    pub level: u32,
    pub deaths: u32,
    /// Unpaused play time. Advances by one tick length per simulated tick.
    pub elapsed_secs: f64,
}

impl RunStats {
    pub fn new(level: u32) -> Self {
        Self {
            level,
            deaths: 0,
            elapsed_secs: 0.0,
        }
    }

    /// Whole seconds of play, as shown on screen.
    pub fn time_secs(&self) -> u32 {
        self.elapsed_secs.floor() as u32
    }

    /// `floor(time + penalty × deaths)`. Lower is better.
    pub fn score(&self, death_penalty_secs: f32) -> u32 {
        (self.elapsed_secs + f64::from(death_penalty_secs) * f64::from(self.deaths)).floor() as u32
    }
}
