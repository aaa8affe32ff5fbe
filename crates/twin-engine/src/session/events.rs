use crate::api::types::{event_kind, GameEvent};
use crate::core::outcome::LossCause;

/// A transition the session went through, queued until the game forwards it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    LevelStarted { level: u32 },
    Lost { cause: LossCause, deaths: u32 },
    LevelWon { level: u32 },
    GameComplete { score: u32, deaths: u32, elapsed_secs: f64 },
    Paused(bool),
    ReturnedToMenu,
}

impl SessionEvent {
    pub fn to_game_event(self) -> GameEvent {
        match self {
            SessionEvent::LevelStarted { level } => {
                GameEvent::new(event_kind::LEVEL_STARTED, level as f32, 0.0, 0.0)
            }
            SessionEvent::Lost { cause, deaths } => {
                GameEvent::new(event_kind::LOST, cause.code() as f32, deaths as f32, 0.0)
            }
            SessionEvent::LevelWon { level } => {
                GameEvent::new(event_kind::LEVEL_WON, level as f32, 0.0, 0.0)
            }
            SessionEvent::GameComplete {
                score,
                deaths,
                elapsed_secs,
            } => GameEvent::new(
                event_kind::GAME_COMPLETE,
                score as f32,
                deaths as f32,
                elapsed_secs as f32,
            ),
            SessionEvent::Paused(paused) => {
                GameEvent::new(event_kind::PAUSED, if paused { 1.0 } else { 0.0 }, 0.0, 0.0)
            }
            SessionEvent::ReturnedToMenu => {
                GameEvent::new(event_kind::RETURNED_TO_MENU, 0.0, 0.0, 0.0)
            }
        }
    }
}
