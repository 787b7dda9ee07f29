use crate::coords::{Point, PxRect, Surface, TexSize};

use super::vertex::{Corner, QuadVertex};

/// Four textured vertices in LT, LB, RB, RT order, plus the cached NDC center
/// of the last display area.
///
/// The position half and the texcoord half are owned by different setters and
/// can be refreshed on independent schedules.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quad {
    vertices: [QuadVertex; 4],
    center: Point,
}

impl Default for Quad {
    fn default() -> Self {
        Self::new()
    }
}

impl Quad {
    /// Full-surface quad sampling the whole texture.
    pub const fn new() -> Self {
        Self {
            vertices: [
                QuadVertex::new(-1.0, 1.0, 0.0, 0.0),
                QuadVertex::new(-1.0, -1.0, 0.0, 1.0),
                QuadVertex::new(1.0, -1.0, 1.0, 1.0),
                QuadVertex::new(1.0, 1.0, 1.0, 0.0),
            ],
            center: Point::zero(),
        }
    }

    /// Builds a quad for `display` on `surface`, sampling `clip` of a `tex_size` texture.
    pub fn from_areas(display: PxRect, surface: Surface, clip: PxRect, tex_size: TexSize) -> Self {
        let mut quad = Self::new();
        quad.set_display_area(display, surface);
        quad.set_clip_area(clip, tex_size);
        quad
    }

    #[inline]
    pub fn vertices(&self) -> &[QuadVertex; 4] {
        &self.vertices
    }

    /// NDC center cached by the last [`Quad::set_display_area`].
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// NDC `(x, y)` of a corner.
    #[inline]
    pub fn position(&self, corner: Corner) -> Point {
        let [x, y, _] = self.vertices[corner.index()].position;
        Point::new(x, y)
    }

    /// Texcoord `(u, v)` of a corner.
    #[inline]
    pub fn uv(&self, corner: Corner) -> Point {
        let [u, v] = self.vertices[corner.index()].uv;
        Point::new(u, v)
    }

    /// The interleaved `[x, y, z, u, v] × 4` floats.
    #[inline]
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw vertex bytes, ready for a vertex buffer upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Overwrites the `(x, y)` of every corner. Leaves z and uv alone.
    pub(crate) fn write_positions(&mut self, corners: [Point; 4]) {
        for (vertex, p) in self.vertices.iter_mut().zip(corners) {
            vertex.position[0] = p.x;
            vertex.position[1] = p.y;
        }
    }

    /// Overwrites the `(u, v)` of every corner. Leaves positions alone.
    pub(crate) fn write_uvs(&mut self, corners: [Point; 4]) {
        for (vertex, p) in self.vertices.iter_mut().zip(corners) {
            vertex.uv = [p.x, p.y];
        }
    }

    pub(crate) fn positions(&self) -> [Point; 4] {
        Corner::ALL.map(|c| self.position(c))
    }

    pub(crate) fn set_center(&mut self, center: Point) {
        self.center = center;
    }
}
