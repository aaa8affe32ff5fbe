use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::body::BodyKind;
use crate::core::platform::{Platform, PlatformKind};
use crate::core::tuning::Tuning;
use crate::level::error::LevelError;

/// Declarative description of one level, as stored in `levels.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDef {
    /// Display name shown in the HUD.
    #[serde(default)]
    pub name: String,
    /// Where the blocks start.
    #[serde(default)]
    pub spawn: Spawns,
    /// Optional time limit in ticks (100 per second).
    #[serde(default)]
    pub countdown: Option<u32>,
    /// Every platform except the goal, in draw order.
    pub platforms: Vec<PlatformDef>,
    /// The goal platform. Always neutral, always resolved last.
    pub goal: GoalDef,
}

/// Spawn points (top-left corners) for both blocks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spawns {
    pub red: [f32; 2],
    pub blue: [f32; 2],
}

impl Default for Spawns {
    fn default() -> Self {
        Self {
            red: [250.0, 470.0],
            blue: [230.0, 470.0],
        }
    }
}

impl Spawns {
    pub fn get(&self, kind: BodyKind) -> Vec2 {
        let [x, y] = match kind {
            BodyKind::Red => self.red,
            BodyKind::Blue => self.blue,
        };
        Vec2::new(x, y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformDef {
    pub x: f32,
    pub y: f32,
    pub length: f32,
    #[serde(default)]
    pub kind: PlatformKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalDef {
    pub x: f32,
    pub y: f32,
    pub length: f32,
}

impl LevelDef {
    /// Build the ordered platform sequence; the goal is always the last element.
    pub fn build_platforms(&self, tuning: &Tuning) -> Vec<Platform> {
        let height = tuning.platform_height;
        let mut platforms = Vec::with_capacity(self.platforms.len() + 1);
        platforms.extend(
            self.platforms
                .iter()
                .map(|p| Platform::new(Vec2::new(p.x, p.y), p.length, height, p.kind)),
        );
        platforms.push(Platform::goal(
            Vec2::new(self.goal.x, self.goal.y),
            self.goal.length,
            height,
        ));
        platforms
    }

    /// Reject data the simulation cannot run sensibly.
    /// `number` is the 1-based level number used in error messages.
    pub fn validate(&self, number: u32, tuning: &Tuning) -> Result<(), LevelError> {
        for (index, p) in self.platforms.iter().enumerate() {
            if p.length <= 0.0 {
                return Err(LevelError::BadPlatform {
                    level: number,
                    index,
                    length: p.length,
                });
            }
        }
        if self.goal.length <= 0.0 {
            return Err(LevelError::BadPlatform {
                level: number,
                index: self.platforms.len(),
                length: self.goal.length,
            });
        }

        for kind in BodyKind::ALL {
            let pos = self.spawn.get(kind);
            let inside = pos.x >= 0.0
                && pos.x + tuning.body_size <= tuning.field_width
                && pos.y >= 0.0
                && pos.y + tuning.body_size <= tuning.field_height;
            if !inside {
                return Err(LevelError::SpawnOutOfField { level: number, body: kind });
            }
        }

        if self.countdown == Some(0) {
            return Err(LevelError::ZeroCountdown { level: number });
        }

        Ok(())
    }
}
