/// Physics constants for the two-block simulation.
///
/// `Tuning::default()` reproduces the values the shipped levels were designed
/// against; changing them makes some jumps impossible.
#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    /// Side length of a player block.
    pub body_size: f32,
    /// Horizontal distance moved per tick while a direction is held.
    pub move_speed: f32,
    /// Subtracted from the vertical velocity each tick while falling.
    pub gravity: f32,
    /// Vertical velocity set by a jump (positive is upward).
    pub jump_speed: f32,
    /// Gravity is only applied while `vy > -max_fall_speed`.
    /// Keeps a falling block from skipping over a 5-unit platform in one tick.
    pub max_fall_speed: f32,
    /// Height of every platform.
    pub platform_height: f32,
    /// How far a block's bottom may sit above a platform top and still land.
    pub land_above: f32,
    /// How far a block's bottom may sink into a platform top and still land.
    pub land_below: f32,
    /// Playfield width. Blocks cannot walk past `0..field_width`.
    pub field_width: f32,
    /// Playfield height. A block whose y exceeds this has fallen off.
    pub field_height: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            body_size: 20.0,
            move_speed: 1.5,
            gravity: 0.08,
            jump_speed: 3.0,
            max_fall_speed: 2.0,
            platform_height: 5.0,
            land_above: 0.5,
            land_below: 2.0,
            field_width: 500.0,
            field_height: 500.0,
        }
    }
}
