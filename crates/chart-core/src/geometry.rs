// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for content-unit math.

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }

    pub fn offset(self, dx: f32, dy: f32) -> Self { Self::new(self.x + dx, self.y + dy) }

    pub fn distance_sq(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}

/// Round to three decimals, the precision used for serialized coordinates.
#[inline]
pub fn round3(v: f32) -> f32 {
    (v * 1000.0).round() / 1000.0
}
