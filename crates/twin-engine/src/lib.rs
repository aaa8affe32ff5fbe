pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod level;
pub mod session;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::{event_kind, GameEvent};
pub use core::body::{Body, BodyKind, Controls};
pub use core::clock::{Countdown, FixedTimestep, TICKS_PER_SECOND};
pub use core::outcome::{LossCause, TickOutcome};
pub use core::platform::{Platform, PlatformKind};
pub use core::tuning::Tuning;
pub use core::world::World;
pub use renderer::instance::{RectInstance, RenderBuffer};
pub use input::queue::{InputEvent, InputQueue};
pub use bridge::protocol::{FrameHeader, ProtocolLayout};
pub use level::{LevelDef, LevelError, LevelProvider, LevelSet};
pub use session::{Command, Direction, Hud, Phase, RunStats, Session, SessionEvent};
pub use systems::render::build_render_buffer;
