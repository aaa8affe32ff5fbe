use crate::api::types::GameEvent;
use crate::core::tuning::Tuning;
use crate::input::queue::InputQueue;
use crate::renderer::instance::RenderBuffer;
use crate::session::hud::Hud;

/// Configuration for the runner and session, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/100, one tick per 10 ms).
    pub fixed_dt: f32,
    /// Maximum number of rectangles drawn per frame (default: 128).
    pub max_instances: usize,
    /// Maximum number of game events per frame (default: 16).
    pub max_events: usize,
    /// Level a new run starts at. Values above 1 skip straight to a level,
    /// which is handy while designing levels.
    pub start_level: u32,
    /// Seconds added to the final score per death (default: 20).
    pub death_penalty_secs: f32,
    /// Physics constants and field size.
    pub tuning: Tuning,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 0.01,
            max_instances: 128,
            max_events: 16,
            start_level: 1,
            death_penalty_secs: 20.0,
            tuning: Tuning::default(),
        }
    }
}

impl GameConfig {
    pub fn world_width(&self) -> f32 {
        self.tuning.field_width
    }

    pub fn world_height(&self) -> f32 {
        self.tuning.field_height
    }
}

/// The contract between a game and the runner.
pub trait Game {
    /// Return configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Consume this frame's input. Called once per frame, before any ticks,
    /// even when the frame runs no ticks.
    fn handle_input(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// One fixed simulation tick.
    fn update(&mut self, ctx: &mut EngineContext);

    /// Optional read-only render pass.
    fn render(&self, _ctx: &mut RenderContext) {}

    /// Text-display state for the browser layer, if the game has any.
    fn hud(&self) -> Option<Hud> {
        None
    }

    /// Numeric screen/phase id written into every frame header.
    fn phase_code(&self) -> u32 {
        0
    }
}

/// Per-frame outputs a game writes while handling input and ticking.
pub struct EngineContext {
    pub events: Vec<GameEvent>,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    /// Emit a game event to be forwarded to TypeScript.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context handed to `Game::render`.
pub struct RenderContext<'a> {
    pub render_buffer: &'a mut RenderBuffer,
}
