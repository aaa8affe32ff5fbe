use twin_engine::{
    EngineContext, FixedTimestep, FrameHeader, Game, GameConfig, InputEvent, InputQueue,
    ProtocolLayout, RenderBuffer, RenderContext,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export generic
/// structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
    frame_counter: u32,
    /// Header + instances + events, packed after every tick.
    frame: Vec<f32>,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);
        let render_buffer = RenderBuffer::with_capacity(config.max_instances);
        let frame = Vec::with_capacity(layout.buffer_total_floats);

        Self {
            game,
            ctx: EngineContext::new(),
            input: InputQueue::new(),
            render_buffer,
            timestep,
            layout,
            config,
            initialized: false,
            frame_counter: 0,
            frame,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.timestep = FixedTimestep::new(self.config.fixed_dt);
        self.render_buffer = RenderBuffer::with_capacity(self.config.max_instances);
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one browser frame: hand over queued input once, run the fixed
    /// ticks the elapsed time allows, then rebuild the render data.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        if !self.input.is_empty() {
            self.game.handle_input(&mut self.ctx, &self.input);
            self.input.drain();
        }

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.game.update(&mut self.ctx);
        }

        self.render_buffer.clear();
        {
            let mut render_ctx = RenderContext {
                render_buffer: &mut self.render_buffer,
            };
            self.game.render(&mut render_ctx);
        }

        if self.ctx.events.len() > self.layout.max_events {
            log::warn!(
                "{} game events this frame, only {} forwarded",
                self.ctx.events.len(),
                self.layout.max_events
            );
            self.ctx.events.truncate(self.layout.max_events);
        }

        self.frame_counter = self.frame_counter.wrapping_add(1);
        let header = FrameHeader {
            frame_counter: self.frame_counter,
            world_width: self.config.world_width(),
            world_height: self.config.world_height(),
            phase: self.game.phase_code(),
        };
        self.layout.pack(
            &header,
            &self.render_buffer.instances,
            &self.ctx.events,
            &mut self.frame,
        );
    }

    /// HUD snapshot as JSON, or an empty string when the game has none.
    pub fn hud_json(&self) -> String {
        let Some(hud) = self.game.hud() else {
            return String::new();
        };
        match hud.to_json() {
            Ok(json) => json,
            Err(err) => {
                log::error!("failed to serialize HUD: {}", err);
                String::new()
            }
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    // ---- Pointer accessors for reads from JS memory ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width()
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height()
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
