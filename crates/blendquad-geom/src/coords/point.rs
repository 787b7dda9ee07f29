use core::ops::{Add, Sub};

/// 2D point.
///
/// Used both for pixel-space pivots (top-left origin, +Y down) and for NDC
/// positions (center origin, +Y up). The type does not track which.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Rotates `self` about `pivot` by an angle given as `(sin, cos)`.
    ///
    /// Positive angles turn counter-clockwise in a +Y-up space.
    #[inline]
    pub fn rotated_about(self, pivot: Point, sin: f32, cos: f32) -> Point {
        let d = self - pivot;
        Point::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos) + pivot
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}
