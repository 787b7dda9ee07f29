use blendquad_geom::coords::{PxRect, Surface, TexSize};
use blendquad_geom::quad::Quad;

/// One textured quad owned by a layer.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadEntry {
    display: PxRect,
    clip: PxRect,
    tex_size: TexSize,
    quad: Quad,
    pub(super) visible: bool,
    pub(super) dirty: bool,
}

impl QuadEntry {
    /// Full-texture entry over `display`. Both rects must already be clamped.
    pub(super) fn new(display: PxRect, tex_size: TexSize, surface: Surface) -> Self {
        let clip = PxRect::full(tex_size.width, tex_size.height);
        Self {
            display,
            clip,
            tex_size,
            quad: Quad::from_areas(display, surface, clip, tex_size),
            visible: true,
            dirty: true,
        }
    }

    /// Display area in surface pixels, as last clamped.
    #[inline]
    pub fn display(&self) -> PxRect {
        self.display
    }

    /// Clip area in texture pixels, as last clamped.
    #[inline]
    pub fn clip(&self) -> PxRect {
        self.clip
    }

    #[inline]
    pub fn tex_size(&self) -> TexSize {
        self.tex_size
    }

    #[inline]
    pub fn quad(&self) -> &Quad {
        &self.quad
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(super) fn set_display(&mut self, rect: PxRect, surface: Surface) {
        self.display = rect;
        self.quad.set_display_area(rect, surface);
        self.dirty = true;
    }

    pub(super) fn set_clip(&mut self, rect: PxRect) {
        self.clip = rect;
        self.quad.set_clip_area(rect, self.tex_size);
        self.dirty = true;
    }

    /// Mutable access to the quad; marks the entry dirty.
    pub(super) fn quad_mut(&mut self) -> &mut Quad {
        self.dirty = true;
        &mut self.quad
    }
}
