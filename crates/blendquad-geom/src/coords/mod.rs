//! Coordinate and extent types shared by the quad transforms.
//!
//! Two spaces are in play:
//! - pixel space: integer pixels, origin top-left, +X right, +Y down
//! - NDC: `[-1, 1]` on both axes, origin center, +Y up
//!
//! Display rectangles live in surface pixel space, clip rectangles in texture
//! pixel space.

pub mod ndc;

mod point;
mod rect;
mod size;
mod surface;

pub use ndc::{ndc_to_unit, to_ndc, to_pixel, unit_to_ndc};
pub use point::Point;
pub use rect::PxRect;
pub use size::TexSize;
pub use surface::{NdcBounds, Surface};
