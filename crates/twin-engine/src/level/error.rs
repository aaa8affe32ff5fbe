use std::fmt;

use crate::core::body::BodyKind;

/// Failure to load or validate level data.
#[derive(Debug)]
pub enum LevelError {
    /// The JSON did not match the level schema.
    Parse(serde_json::Error),
    /// The file parsed but contains no levels.
    Empty,
    /// A platform with a non-positive length. `index == platforms.len()` means the goal.
    BadPlatform { level: u32, index: usize, length: f32 },
    /// A spawn point puts a block partly outside the field.
    SpawnOutOfField { level: u32, body: BodyKind },
    /// A countdown of zero would lose the level before the first tick.
    ZeroCountdown { level: u32 },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "level data parse error: {err}"),
            Self::Empty => write!(f, "level data contains no levels"),
            Self::BadPlatform {
                level,
                index,
                length,
            } => write!(
                f,
                "level {level}: platform {index} has non-positive length {length}"
            ),
            Self::SpawnOutOfField { level, body } => {
                write!(f, "level {level}: {body:?} spawn lies outside the field")
            }
            Self::ZeroCountdown { level } => write!(f, "level {level}: countdown must be positive"),
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LevelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}
