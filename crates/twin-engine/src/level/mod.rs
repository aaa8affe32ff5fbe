pub mod def;
pub mod error;
pub mod provider;

pub use def::{GoalDef, LevelDef, PlatformDef, Spawns};
pub use error::LevelError;
pub use provider::{LevelProvider, LevelSet};
