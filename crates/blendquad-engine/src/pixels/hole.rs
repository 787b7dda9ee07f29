use blendquad_geom::coords::{PxRect, TexSize};

use crate::error::PixelError;

/// Overwrites `rect` of a tightly packed RGBA8 image with `(0, 0, 0, alpha)`.
///
/// `rect` is clamped to `size` first; the clamped rect is returned so the
/// caller can upload just that sub-image.
pub fn punch_alpha_hole(
    pixels: &mut [u8],
    size: TexSize,
    rect: PxRect,
    alpha: u8,
) -> Result<PxRect, PixelError> {
    let expected = size.pixel_count() * 4;
    if pixels.len() != expected {
        return Err(PixelError::BufferSize { expected, actual: pixels.len() });
    }

    let rect = rect.clamped_to(size.width, size.height);
    if rect.is_empty() {
        return Ok(rect);
    }

    let texels: &mut [[u8; 4]] = bytemuck::cast_slice_mut(pixels);
    let stride = size.width as usize;
    let (x0, x1) = (rect.left as usize, rect.right() as usize);
    for y in rect.top as usize..rect.bottom() as usize {
        texels[y * stride + x0..y * stride + x1].fill([0, 0, 0, alpha]);
    }

    log::trace!("punched {rect:?} to alpha {alpha}");
    Ok(rect)
}
