use crate::core::body::BodyKind;
use crate::core::outcome::LossCause;

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Title screen, waiting for Start.
    Menu,
    /// Instructions overlay. The phase underneath is kept by the session.
    Instructions,
    Playing,
    /// Level visible but frozen.
    Paused,
    /// Level lost, waiting for Restart.
    Lost(LossCause),
    /// Both blocks reached the goal; the next tick loads the next level.
    Won,
    /// Last level cleared; final score shown.
    GameComplete,
}

impl Phase {
    /// Numeric code written into the frame header.
    pub fn code(self) -> u32 {
        match self {
            Phase::Menu => 0,
            Phase::Instructions => 1,
            Phase::Playing => 2,
            Phase::Paused => 3,
            Phase::Lost(_) => 4,
            Phase::Won => 5,
            Phase::GameComplete => 6,
        }
    }

    /// Lowercase name used in the HUD.
    pub fn name(self) -> &'static str {
        match self {
            Phase::Menu => "menu",
            Phase::Instructions => "instructions",
            Phase::Playing => "playing",
            Phase::Paused => "paused",
            Phase::Lost(_) => "lost",
            Phase::Won => "won",
            Phase::GameComplete => "game_complete",
        }
    }

    /// The level field (blocks and platforms) is drawn in this phase.
    pub fn shows_field(self) -> bool {
        matches!(self, Phase::Playing | Phase::Paused)
    }

    /// Movement and jump intents are recorded in this phase.
    pub fn accepts_intents(self) -> bool {
        matches!(self, Phase::Playing | Phase::Paused)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Everything a player (or a UI button) can ask the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    ToggleInstructions,
    TogglePause,
    /// Replay the current level after a loss.
    Restart,
    ReturnToMenu,
    Move {
        body: BodyKind,
        dir: Direction,
        pressed: bool,
    },
    Jump {
        body: BodyKind,
        pressed: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_distinct() {
        let phases = [
            Phase::Menu,
            Phase::Instructions,
            Phase::Playing,
            Phase::Paused,
            Phase::Lost(LossCause::TimedOut),
            Phase::Won,
            Phase::GameComplete,
        ];
        let codes: HashSet<u32> = phases.iter().map(|p| p.code()).collect();
        assert_eq!(codes.len(), phases.len());
        assert!(codes.iter().all(|&c| c < 7));
    }

    #[test]
    fn field_only_visible_while_playing_or_paused() {
        assert!(Phase::Playing.shows_field());
        assert!(Phase::Paused.shows_field());
        assert!(!Phase::Lost(LossCause::FellOffField).shows_field());
        assert!(!Phase::Menu.shows_field());
        assert!(!Phase::Won.accepts_intents());
    }
}
