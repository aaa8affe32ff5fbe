use bytemuck::{Pod, Zeroable};

/// A game event communicated from Rust to TypeScript.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }
}

/// Event kinds (Rust → TypeScript). Payload meaning is listed per kind.
pub mod event_kind {
    /// a = level number
    pub const LEVEL_STARTED: f32 = 1.0;
    /// a = loss cause code, b = total deaths
    pub const LOST: f32 = 2.0;
    /// a = level number
    pub const LEVEL_WON: f32 = 3.0;
    /// a = score, b = deaths, c = elapsed seconds
    pub const GAME_COMPLETE: f32 = 4.0;
    /// a = 1 when paused, 0 when resumed
    pub const PAUSED: f32 = 5.0;
    pub const RETURNED_TO_MENU: f32 = 6.0;
}
