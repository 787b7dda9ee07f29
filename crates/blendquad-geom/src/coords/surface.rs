use super::ndc::to_ndc;
use super::{Point, PxRect};

/// Render-target size in pixels.
///
/// This is the basis for converting display rectangles and pivots to NDC.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
}

/// A pixel rectangle's edges in NDC, Y already flipped (`top >= bottom`).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct NdcBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl NdcBounds {
    #[inline]
    pub fn center(self) -> Point {
        Point::new(
            (self.right - self.left) / 2.0 + self.left,
            (self.top - self.bottom) / 2.0 + self.bottom,
        )
    }

    /// Corners in quad order: left-top, left-bottom, right-bottom, right-top.
    #[inline]
    pub fn corners(self) -> [Point; 4] {
        [
            Point::new(self.left, self.top),
            Point::new(self.left, self.bottom),
            Point::new(self.right, self.bottom),
            Point::new(self.right, self.top),
        ]
    }
}

impl Surface {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Converts a pixel-space point to NDC, flipping Y.
    #[inline]
    pub fn point_to_ndc(self, p: Point) -> Point {
        Point::new(
            to_ndc(p.x, self.width as f32),
            -to_ndc(p.y, self.height as f32),
        )
    }

    /// Converts a pixel rectangle to NDC edges, flipping Y.
    pub fn rect_to_ndc(self, rect: PxRect) -> NdcBounds {
        let w = self.width as f32;
        let h = self.height as f32;
        NdcBounds {
            left: to_ndc(rect.left as f32, w),
            right: to_ndc(rect.right() as f32, w),
            top: -to_ndc(rect.top as f32, h),
            bottom: -to_ndc(rect.bottom() as f32, h),
        }
    }

    /// Per-axis scale applied to rotated offsets on non-square surfaces.
    ///
    /// Wide surfaces stretch Y by `width / height`, tall surfaces stretch X
    /// by `height / width`, square surfaces are left alone.
    pub fn aspect_correction(self) -> Point {
        let w = self.width as f32;
        let h = self.height as f32;
        if self.width > self.height {
            Point::new(1.0, w / h)
        } else if self.height > self.width {
            Point::new(h / w, 1.0)
        } else {
            Point::new(1.0, 1.0)
        }
    }
}
