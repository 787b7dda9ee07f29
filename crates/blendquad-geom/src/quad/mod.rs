//! Textured quads and the transforms that fill them.
//!
//! A [`Quad`] is written in two independent halves:
//! - positions, from a display rectangle and the surface size (plus rotation)
//! - texcoords, from a clip rectangle and the texture size
//!
//! Every quad is drawn with the shared [`QUAD_INDICES`].

mod areas;
mod rotate;
mod textured_quad;
mod vertex;

pub use textured_quad::Quad;
pub use vertex::{Corner, QuadVertex, QUAD_INDICES};
