//! Game shell around the world: menu, instructions, pause, loss, level
//! progression and run statistics.

pub mod events;
pub mod hud;
pub mod phase;
pub mod stats;

pub use events::SessionEvent;
pub use hud::{Hud, INSTRUCTIONS};
pub use phase::{Command, Direction, Phase};
pub use stats::RunStats;

use crate::api::game::GameConfig;
use crate::core::body::{Body, BodyKind};
use crate::core::clock::{Countdown, TICKS_PER_SECOND};
use crate::core::outcome::LossCause;
use crate::core::world::World;
use crate::level::{LevelProvider, LevelSet};

/// Play time credited per simulated tick.
const TICK_SECS: f64 = 1.0 / TICKS_PER_SECOND as f64;

/// Owns the world, the current phase and the run statistics.
///
/// Commands may arrive at any time between ticks; they only record intents or
/// switch phases. All simulation happens in [`Session::tick`].
pub struct Session<P: LevelProvider = LevelSet> {
    config: GameConfig,
    levels: P,
    world: World,
    phase: Phase,
    /// Phase to restore when the instructions screen closes.
    under_instructions: Phase,
    stats: RunStats,
    countdown: Option<Countdown>,
    /// The countdown ran out, whatever loss cause was reported.
    timed_out: bool,
    events: Vec<SessionEvent>,
}

impl<P: LevelProvider> Session<P> {
    pub fn new(config: GameConfig, levels: P) -> Self {
        let stats = RunStats::new(config.start_level);
        Self {
            config,
            levels,
            world: World::empty(),
            phase: Phase::Menu,
            under_instructions: Phase::Menu,
            stats,
            countdown: None,
            timed_out: false,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn levels(&self) -> &P {
        &self.levels
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The phase underneath the instructions overlay, or the current phase.
    pub fn active_phase(&self) -> Phase {
        match self.phase {
            Phase::Instructions => self.under_instructions,
            phase => phase,
        }
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn countdown(&self) -> Option<&Countdown> {
        self.countdown.as_ref()
    }

    /// Final score for the run so far.
    pub fn score(&self) -> u32 {
        self.stats.score(self.config.death_penalty_secs)
    }

    /// Take the transitions recorded since the last drain.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, SessionEvent> {
        self.events.drain(..)
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Start => self.start(),
            Command::ToggleInstructions => self.toggle_instructions(),
            Command::TogglePause => self.toggle_pause(),
            Command::Restart => self.restart(),
            Command::ReturnToMenu => self.return_to_menu(),
            Command::Move { body, dir, pressed } => {
                if let Some(b) = self.intent_target(body) {
                    match dir {
                        Direction::Left => b.set_left(pressed),
                        Direction::Right => b.set_right(pressed),
                    }
                }
            }
            Command::Jump { body, pressed } => {
                if let Some(b) = self.intent_target(body) {
                    if pressed {
                        b.press_jump();
                    } else {
                        b.release_jump();
                    }
                }
            }
        }
    }

    /// Advance one tick. Returns the phase after the tick.
    pub fn tick(&mut self) -> Phase {
        match self.phase {
            Phase::Playing => self.step_level(),
            Phase::Won => self.advance(),
            _ => {}
        }
        self.phase
    }

    pub fn hud(&self) -> Hud {
        let level_name = if self.phase == Phase::Menu {
            String::new()
        } else {
            self.levels
                .level(self.stats.level)
                .map(|l| l.name.clone())
                .unwrap_or_default()
        };
        let loss = match self.active_phase() {
            Phase::Lost(cause) => Some(cause),
            _ => None,
        };
        Hud {
            phase: self.phase.name(),
            paused: self.active_phase() == Phase::Paused,
            level: self.stats.level,
            level_name,
            deaths: self.stats.deaths,
            time_secs: self.stats.time_secs(),
            countdown_secs: self.countdown.map(|c| c.display_secs()),
            loss,
            timed_out: self.timed_out,
            score: (self.phase == Phase::GameComplete).then(|| self.score()),
            instructions: (self.phase == Phase::Instructions).then_some(INSTRUCTIONS),
        }
    }

    // -- Commands --

    fn start(&mut self) {
        if self.phase != Phase::Menu {
            log::debug!("start ignored in {:?}", self.phase);
            return;
        }
        self.stats = RunStats::new(self.config.start_level);
        if !self.load_level(self.stats.level) {
            log::error!("no level {} to start from", self.stats.level);
        }
    }

    fn toggle_instructions(&mut self) {
        if self.phase == Phase::Instructions {
            self.phase = self.under_instructions;
        } else {
            self.under_instructions = self.phase;
            self.phase = Phase::Instructions;
        }
    }

    fn toggle_pause(&mut self) {
        let target = if self.phase == Phase::Instructions {
            &mut self.under_instructions
        } else {
            &mut self.phase
        };
        let paused = match *target {
            Phase::Playing => true,
            Phase::Paused => false,
            other => {
                log::debug!("pause ignored in {:?}", other);
                return;
            }
        };
        *target = if paused { Phase::Paused } else { Phase::Playing };
        self.events.push(SessionEvent::Paused(paused));
    }

    fn restart(&mut self) {
        if !matches!(self.phase, Phase::Lost(_)) {
            log::debug!("restart ignored in {:?}", self.phase);
            return;
        }
        self.load_level(self.stats.level);
    }

    fn return_to_menu(&mut self) {
        self.world = World::empty();
        self.phase = Phase::Menu;
        self.under_instructions = Phase::Menu;
        self.stats = RunStats::new(self.config.start_level);
        self.countdown = None;
        self.timed_out = false;
        self.events.push(SessionEvent::ReturnedToMenu);
        log::info!("returned to menu");
    }

    fn intent_target(&mut self, body: BodyKind) -> Option<&mut Body> {
        if self.active_phase().accepts_intents() {
            Some(self.world.body_mut(body))
        } else {
            None
        }
    }

    // -- Ticking --

    /// (Re)build the world for `number` and start playing it.
    /// Returns `false` when the provider has no such level.
    fn load_level(&mut self, number: u32) -> bool {
        let Some(def) = self.levels.level(number) else {
            return false;
        };
        let tuning = &self.config.tuning;
        self.world = World::new(
            def.spawn.get(BodyKind::Red),
            def.spawn.get(BodyKind::Blue),
            def.build_platforms(tuning),
        );
        self.countdown = def.countdown.map(Countdown::new);
        self.timed_out = false;
        log::info!("level {} ({}) started", number, def.name);

        self.stats.level = number;
        self.phase = Phase::Playing;
        self.events.push(SessionEvent::LevelStarted { level: number });
        true
    }

    fn step_level(&mut self) {
        let outcome = self.world.step(&self.config.tuning);
        self.stats.elapsed_secs += TICK_SECS;

        let mut loss = outcome.loss();
        if let Some(countdown) = self.countdown.as_mut() {
            if countdown.tick() {
                self.timed_out = true;
                loss.get_or_insert(LossCause::TimedOut);
            }
        }

        if let Some(cause) = loss {
            self.stats.deaths += 1;
            self.phase = Phase::Lost(cause);
            log::info!("level {} lost: {}", self.stats.level, cause);
            self.events.push(SessionEvent::Lost {
                cause,
                deaths: self.stats.deaths,
            });
        } else if outcome.both_done {
            self.phase = Phase::Won;
            log::info!("level {} won", self.stats.level);
            self.events.push(SessionEvent::LevelWon {
                level: self.stats.level,
            });
        }
    }

    fn advance(&mut self) {
        let next = self.stats.level + 1;
        if self.load_level(next) {
            return;
        }
        self.phase = Phase::GameComplete;
        let score = self.score();
        log::info!(
            "game complete: {} deaths, {}s, score {}",
            self.stats.deaths,
            self.stats.time_secs(),
            score
        );
        self.events.push(SessionEvent::GameComplete {
            score,
            deaths: self.stats.deaths,
            elapsed_secs: self.stats.elapsed_secs,
        });
    }
}
