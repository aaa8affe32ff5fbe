use glam::Vec2;

/// Axis-aligned rectangle anchored at its top-left corner (screen y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_pos(pos: Vec2, w: f32, h: f32) -> Self {
        Self::new(pos.x, pos.y, w, h)
    }
}

/// Two same-sized squares (top-left corners `a`, `b`, side `side`) overlap
/// iff both axis distances are strictly less than `side`.
/// Touching edges do not count.
#[inline]
pub fn boxes_overlap(a: Vec2, b: Vec2, side: f32) -> bool {
    (a.x - b.x).abs() < side && (a.y - b.y).abs() < side
}

/// Strict axis-aligned rectangle intersection.
#[inline]
pub fn rects_overlap(a: Rect, b: Rect) -> bool {
    a.x + a.w > b.x && a.x < b.x + b.w && a.y + a.h > b.y && a.y < b.y + b.h
}
