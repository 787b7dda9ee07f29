use crate::coords::{Point, PxRect, Surface, TexSize};

use super::Quad;

impl Quad {
    /// Places the quad over `rect` (surface pixels) and recaches its NDC center.
    ///
    /// Only the position half is written. `rect` is expected to be clamped to
    /// `surface` already, and `surface` must have non-zero extents.
    pub fn set_display_area(&mut self, rect: PxRect, surface: Surface) {
        debug_assert!(surface.is_valid(), "display area on zero-sized surface {surface:?}");
        let bounds = surface.rect_to_ndc(rect);
        self.write_positions(bounds.corners());
        self.set_center(bounds.center());
        log::trace!("display area {rect:?} -> {bounds:?}");
    }

    /// Samples `clip` (texture pixels) of a `tex_size` texture.
    ///
    /// Only the texcoord half is written. Texcoords are plain fractions of the
    /// texture extent, top-left origin, no flip.
    pub fn set_clip_area(&mut self, clip: PxRect, tex_size: TexSize) {
        debug_assert!(tex_size.is_valid(), "clip area on zero-sized texture {tex_size:?}");
        let w = tex_size.width as f32;
        let h = tex_size.height as f32;
        let left = clip.left as f32 / w;
        let right = clip.right() as f32 / w;
        let top = clip.top as f32 / h;
        let bottom = clip.bottom() as f32 / h;
        self.write_uvs([
            Point::new(left, top),
            Point::new(left, bottom),
            Point::new(right, bottom),
            Point::new(right, top),
        ]);
    }
}
