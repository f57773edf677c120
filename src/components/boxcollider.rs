//! Axis-aligned box used for lemon hit tests and spawn spacing.
//!
//! Boxes are centred on the owner's position: a lemon at `(x, y)` with a
//! `30x15` collider covers `x - 15 .. x + 15` horizontally and
//! `y - 7.5 .. y + 7.5` vertically.

use raylib::prelude::Vector2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxCollider {
    pub size: Vector2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
        }
    }

    pub fn half_extents(&self) -> Vector2 {
        Vector2::new(self.size.x * 0.5, self.size.y * 0.5)
    }

    /// Returns (min, max) of the box for a given centre.
    pub fn aabb(&self, center: Vector2) -> (Vector2, Vector2) {
        let half = self.half_extents();
        let min = Vector2::new(center.x - half.x, center.y - half.y);
        let max = Vector2::new(center.x + half.x, center.y + half.y);
        (min, max)
    }

    /// Top-left corner of the box, where sprites are drawn from.
    pub fn top_left(&self, center: Vector2) -> Vector2 {
        self.aabb(center).0
    }

    /// Strict point containment: a point exactly on the edge is outside.
    pub fn contains_point(&self, center: Vector2, point: Vector2) -> bool {
        let half = self.half_extents();
        (point.x - center.x).abs() < half.x && (point.y - center.y).abs() < half.y
    }

    /// Spawn spacing test.
    ///
    /// Two boxes of this size are spaced when their centres differ by at
    /// least `width + margin` horizontally *and* `height + margin`
    /// vertically.
    pub fn spaced_from(&self, center: Vector2, other_center: Vector2, margin: f32) -> bool {
        (center.x - other_center.x).abs() >= self.size.x + margin
            && (center.y - other_center.y).abs() >= self.size.y + margin
    }
}
