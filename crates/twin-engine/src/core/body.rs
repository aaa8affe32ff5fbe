use glam::Vec2;
use serde::Serialize;

use crate::core::geometry::{boxes_overlap, rects_overlap, Rect};
use crate::core::outcome::{LossCause, TickOutcome};
use crate::core::platform::Platform;
use crate::core::tuning::Tuning;

/// Which player a block belongs to. Decides the platforms it may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    /// Player A, arrow keys.
    Red,
    /// Player B, `a`/`d`/`w`.
    Blue,
}

impl BodyKind {
    pub const ALL: [BodyKind; 2] = [BodyKind::Red, BodyKind::Blue];

    /// Slot in the world's body pair. Red resolves first.
    pub fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Blue => 1,
        }
    }
}

/// Per-tick control intents, written by the driver between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    /// Jump key is held.
    pub want_jump: bool,
    /// Jump latch: re-armed only when the jump key is released.
    pub can_jump: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            left: false,
            right: false,
            want_jump: false,
            can_jump: true,
        }
    }
}

/// One player-controlled block.
///
/// Velocity sign convention: `vy > 0` moves the block up the screen, and
/// `update` applies it as `y -= vy`.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub kind: BodyKind,
    /// Top-left corner.
    pub pos: Vec2,
    pub vy: f32,
    /// No platform or block supported this body on its last fall check.
    pub falling: bool,
    /// Resting on the goal platform.
    pub done: bool,
    pub controls: Controls,
}

impl Body {
    pub fn new(kind: BodyKind, pos: Vec2) -> Self {
        Self {
            kind,
            pos,
            vy: 0.0,
            falling: false,
            done: false,
            controls: Controls::default(),
        }
    }

    pub fn rect(&self, size: f32) -> Rect {
        Rect::from_pos(self.pos, size, size)
    }

    // -- Driver intents --

    pub fn set_left(&mut self, held: bool) {
        self.controls.left = held;
    }

    pub fn set_right(&mut self, held: bool) {
        self.controls.right = held;
    }

    pub fn press_jump(&mut self) {
        self.controls.want_jump = true;
    }

    /// Key release: drop the request and re-arm the latch.
    pub fn release_jump(&mut self) {
        self.controls.want_jump = false;
        self.controls.can_jump = true;
    }

    // -- Simulation --

    /// Resolve support for this tick: platform landings, forbidden contact,
    /// and resting on the other block's back.
    pub fn check_fall(
        &mut self,
        platforms: &[Platform],
        other: &Body,
        tuning: &Tuning,
        outcome: &mut TickOutcome,
    ) {
        let size = tuning.body_size;
        let mut supported = false;
        self.done = false;

        for platform in platforms {
            let admitted = platform.kind.admits(self.kind);

            if !admitted && rects_overlap(self.rect(size), platform.rect()) {
                outcome.lose(LossCause::ForbiddenContact);
            }

            let spans = self.pos.x + size > platform.pos.x
                && platform.pos.x + platform.length > self.pos.x;
            if !spans {
                continue;
            }

            // Positive when the bottom has sunk below the platform top.
            let sink = self.pos.y + size - platform.top();
            if sink <= tuning.land_below && sink >= -tuning.land_above {
                self.pos.y = platform.top() - size;
                if self.vy < 0.0 {
                    self.vy = 0.0;
                }
                if admitted {
                    supported = true;
                    if platform.goal {
                        self.done = true;
                    }
                } else {
                    outcome.lose(LossCause::ForbiddenLanding);
                }
            }
        }

        let next = Vec2::new(self.pos.x, self.pos.y - self.vy);
        if self.vy <= 0.0 && !other.falling && boxes_overlap(next, other.pos, size) {
            supported = true;
            if self.vy < 0.0 {
                self.vy = 0.0;
            }
        }

        self.falling = !supported;
    }

    /// Apply horizontal motion (pushing `other`), vertical motion, riding,
    /// gravity, the off-field check and a pending jump.
    pub fn update(&mut self, other: &mut Body, tuning: &Tuning, outcome: &mut TickOutcome) {
        let size = tuning.body_size;
        let speed = tuning.move_speed;

        if self.controls.right && self.pos.x + size < tuning.field_width {
            let dx = speed.min(tuning.field_width - (self.pos.x + size));
            self.pos.x += dx;
            // Probe one step ahead so a neighbour is shoved before boxes meet.
            let probe = Vec2::new(self.pos.x + speed, self.pos.y);
            if boxes_overlap(probe, other.pos, size) {
                other.pos.x += dx.min(tuning.field_width - (other.pos.x + size)).max(0.0);
            }
        }
        if self.controls.left && self.pos.x > 0.0 {
            let dx = speed.min(self.pos.x);
            self.pos.x -= dx;
            let probe = Vec2::new(self.pos.x - speed, self.pos.y);
            if boxes_overlap(probe, other.pos, size) {
                other.pos.x -= dx.min(other.pos.x).max(0.0);
            }
        }

        self.pos.y -= self.vy;

        // Riding: sit on top of the other block and move with it.
        if self.pos.y < other.pos.y && boxes_overlap(self.pos, other.pos, size) {
            self.pos.y = other.pos.y - size;
            self.vy = other.vy;
        }

        if self.falling {
            if self.vy > -tuning.max_fall_speed {
                self.vy -= tuning.gravity;
            }
        } else if self.vy < 0.0 {
            self.vy = 0.0;
        }

        if self.pos.y > tuning.field_height {
            outcome.lose(LossCause::FellOffField);
        }

        if self.controls.want_jump && self.controls.can_jump {
            self.jump(tuning);
        }
    }

    /// Launch upward. Ignored while falling.
    pub fn jump(&mut self, tuning: &Tuning) {
        if self.falling {
            return;
        }
        self.vy = tuning.jump_speed;
        self.controls.want_jump = false;
        self.controls.can_jump = false;
    }
}
