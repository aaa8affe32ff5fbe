use std::fmt;

use serde::Serialize;

/// Why a run ended in a loss. All causes have the same effect on the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LossCause {
    /// A block's box overlapped a platform it is not allowed to touch.
    ForbiddenContact,
    /// A block settled onto a platform it is not allowed to stand on.
    ForbiddenLanding,
    /// A block dropped below the bottom of the field.
    FellOffField,
    /// The level countdown reached zero.
    TimedOut,
}

impl LossCause {
    /// Numeric code carried in `GameEvent` payloads.
    pub fn code(self) -> u32 {
        match self {
            Self::ForbiddenContact => 1,
            Self::ForbiddenLanding => 2,
            Self::FellOffField => 3,
            Self::TimedOut => 4,
        }
    }
}

impl fmt::Display for LossCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForbiddenContact => write!(f, "touched a forbidden platform"),
            Self::ForbiddenLanding => write!(f, "landed on a forbidden platform"),
            Self::FellOffField => write!(f, "fell off the field"),
            Self::TimedOut => write!(f, "time expired"),
        }
    }
}

/// Result accumulator for one simulation tick.
///
/// Loss is sticky: the first recorded cause is kept, later ones are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    loss: Option<LossCause>,
    /// Both blocks ended the tick resting on the goal platform.
    pub both_done: bool,
}

impl TickOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lose(&mut self, cause: LossCause) {
        if self.loss.is_none() {
            log::debug!("loss signalled: {}", cause);
            self.loss = Some(cause);
        }
    }

    pub fn loss(&self) -> Option<LossCause> {
        self.loss
    }

    pub fn is_lost(&self) -> bool {
        self.loss.is_some()
    }
}
