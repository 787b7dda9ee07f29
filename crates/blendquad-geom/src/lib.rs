//! Rectangle-to-quad geometry for layered texture compositing.
//!
//! Converts pixel-space display and clip rectangles into the interleaved
//! `[x, y, z, u, v] × 4` vertex data of a textured quad, and rotates quads
//! about their own center or an arbitrary pixel-space pivot.
//!
//! # Quick start
//!
//! ```rust
//! use blendquad_geom::coords::{PxRect, Surface, TexSize};
//! use blendquad_geom::quad::{Quad, QUAD_INDICES};
//!
//! let surface = Surface::new(1280, 720);
//! let mut quad = Quad::new();
//! quad.set_display_area(PxRect::new(0, 0, 1280, 720), surface);
//! quad.set_clip_area(PxRect::new(64, 64, 128, 128), TexSize::new(256, 256));
//!
//! assert_eq!(quad.as_floats().len(), 20);
//! assert_eq!(QUAD_INDICES, [0, 1, 2, 0, 2, 3]);
//! ```

pub mod coords;
pub mod quad;
