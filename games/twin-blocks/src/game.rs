use twin_engine::*;

use crate::keymap::KeyMap;

pub struct TwinBlocks {
    session: Session,
    keymap: KeyMap,
}

impl TwinBlocks {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Skip the usual first level and start every run at `level`.
    pub fn starting_at(level: u32) -> Self {
        Self::with_config(GameConfig {
            start_level: level,
            ..GameConfig::default()
        })
    }

    pub fn with_config(config: GameConfig) -> Self {
        let levels = LevelSet::builtin(&config.tuning).unwrap_or_else(|err| {
            log::error!("built-in levels failed to load: {}", err);
            LevelSet::default()
        });
        Self {
            session: Session::new(config, levels),
            keymap: KeyMap::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn forward_events(&mut self, ctx: &mut EngineContext) {
        for event in self.session.drain_events() {
            ctx.emit_event(event.to_game_event());
        }
    }
}

impl Default for TwinBlocks {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for TwinBlocks {
    fn config(&self) -> GameConfig {
        self.session.config().clone()
    }

    fn init(&mut self, _ctx: &mut EngineContext) {
        log::info!(
            "{} levels loaded, runs start at level {}",
            self.session.levels().level_count(),
            self.session.config().start_level
        );
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            let command = match *event {
                InputEvent::KeyDown { key_code } => self.keymap.key_down(key_code),
                InputEvent::KeyUp { key_code } => self.keymap.key_up(key_code),
                InputEvent::Custom { kind, .. } => self.keymap.custom(kind),
            };
            if let Some(command) = command {
                self.session.apply(command);
            }
        }
        self.forward_events(ctx);
    }

    fn update(&mut self, ctx: &mut EngineContext) {
        self.session.tick();
        self.forward_events(ctx);
    }

    fn render(&self, ctx: &mut RenderContext) {
        if self.session.phase().shows_field() {
            build_render_buffer(
                self.session.world(),
                &self.session.config().tuning,
                ctx.render_buffer,
            );
        }
    }

    fn hud(&self) -> Option<Hud> {
        Some(self.session.hud())
    }

    fn phase_code(&self) -> u32 {
        self.session.phase().code()
    }
}
