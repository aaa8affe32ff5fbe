use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::body::BodyKind;
use crate::core::geometry::Rect;

/// Color class of a platform. Decides which blocks may touch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformKind {
    /// Black: both blocks may stand here.
    #[default]
    Neutral,
    /// Red: only the red block.
    RedOnly,
    /// Blue: only the blue block.
    BlueOnly,
    /// Green: touching it loses the run for either block.
    Forbidden,
}

impl PlatformKind {
    /// Whether a block of `kind` may touch or stand on this platform.
    pub fn admits(self, kind: BodyKind) -> bool {
        match self {
            Self::Neutral => true,
            Self::RedOnly => kind == BodyKind::Red,
            Self::BlueOnly => kind == BodyKind::Blue,
            Self::Forbidden => false,
        }
    }
}

/// A static platform. Built fresh from level data on every (re)start.
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    /// Top-left corner.
    pub pos: Vec2,
    pub length: f32,
    pub height: f32,
    pub kind: PlatformKind,
    /// The single goal platform of a level (always the last in the sequence).
    pub goal: bool,
}

impl Platform {
    pub fn new(pos: Vec2, length: f32, height: f32, kind: PlatformKind) -> Self {
        Self {
            pos,
            length,
            height,
            kind,
            goal: false,
        }
    }

    pub fn goal(pos: Vec2, length: f32, height: f32) -> Self {
        Self {
            goal: true,
            ..Self::new(pos, length, height, PlatformKind::Neutral)
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos(self.pos, self.length, self.height)
    }

    /// Top edge y coordinate.
    pub fn top(&self) -> f32 {
        self.pos.y
    }
}
