/// Rectangles and the angle helpers behind sphere bouncing, on top of
/// `glam::Vec2`.
///
/// Screen space: x grows to the right, y grows downward.

use glam::Vec2;

/// Unit vector pointing along `angle` degrees (0° = right, 90° = down).
pub fn heading(angle: f32) -> Vec2 {
    Vec2::from_angle(angle.to_radians())
}

// ── Rectangles ────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle; `(x, y)` is the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect { x, y, width, height }
    }

    pub fn at(position: Vec2, size: Vec2) -> Self {
        Rect::new(position.x, position.y, size.x, size.y)
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Strict overlap on both axes; rectangles that only share an edge do
    /// not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        let x_overlap = self.x < other.right() && self.right() > other.x;
        let y_overlap = self.y < other.bottom() && self.bottom() > other.y;
        x_overlap && y_overlap
    }
}

// ── Angles ────────────────────────────────────────────────────────────────────

/// Wrap any angle into `[0, 360)`.
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Bounce off a left or right margin.
pub fn reflect_off_side(angle: f32) -> f32 {
    normalize_degrees(180.0 - angle)
}

/// Bounce off the top or bottom margin.
pub fn reflect_off_floor(angle: f32) -> f32 {
    normalize_degrees(360.0 - angle)
}
