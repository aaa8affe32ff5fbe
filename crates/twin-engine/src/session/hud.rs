use serde::Serialize;

use crate::core::outcome::LossCause;

/// Lines shown on the instructions screen.
pub const INSTRUCTIONS: &[&str] = &[
    "Use the left, right, and up arrows to control the red block",
    "Use the \"a\", \"d\", and \"w\" keys to control the blue block",
    "Both blocks can stand on black platforms",
    "Touching a green platform loses the level",
    "The red block cannot stand on blue platforms, and vice versa",
    "Get both blocks onto the brown platform to win",
    "Some later levels have a time limit",
    "Your score is your time plus 20 seconds per death",
    "Try to get the lowest score possible",
    "Press \"p\" to pause and unpause",
    "Press \"m\" to reset the game and return to the main menu",
];

/// Everything the browser needs to draw text for the current frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    pub phase: &'static str,
    pub paused: bool,
    pub level: u32,
    pub level_name: String,
    pub deaths: u32,
    /// Whole seconds of unpaused play.
    pub time_secs: u32,
    /// Seconds left on the level countdown, if the level has one.
    pub countdown_secs: Option<u32>,
    pub loss: Option<LossCause>,
    pub timed_out: bool,
    /// Final score, only once the game is complete.
    pub score: Option<u32>,
    /// Instruction lines, only while the instructions screen is up.
    pub instructions: Option<&'static [&'static str]>,
}

impl Hud {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
