use bytemuck::{Pod, Zeroable};

// ── quad vertex ───────────────────────────────────────────────────────────

/// Interleaved vertex: NDC position (z always 0) followed by texcoord.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl QuadVertex {
    /// Byte stride between consecutive vertices.
    pub const STRIDE: usize = std::mem::size_of::<QuadVertex>();
    /// Byte offset of `position` (3 × f32).
    pub const POSITION_OFFSET: usize = 0;
    /// Byte offset of `uv` (2 × f32).
    pub const UV_OFFSET: usize = 3 * std::mem::size_of::<f32>();

    #[inline]
    pub const fn new(x: f32, y: f32, u: f32, v: f32) -> Self {
        Self { position: [x, y, 0.0], uv: [u, v] }
    }
}

// ── corner order ──────────────────────────────────────────────────────────

/// Vertex slots of a quad, in buffer order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Corner {
    LeftTop = 0,
    LeftBottom = 1,
    RightBottom = 2,
    RightTop = 3,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::LeftTop,
        Corner::LeftBottom,
        Corner::RightBottom,
        Corner::RightTop,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Two triangles over the LT, LB, RB, RT vertex order. Shared by every quad.
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];
