//! Pixel ⇄ normalized device coordinate conversion.
//!
//! NDC spans `[-1, 1]` on both axes. These helpers are axis-agnostic; the
//! Y flip between pixel space (+Y down) and NDC (+Y up) is applied by
//! [`Surface`](super::Surface).

/// Maps a `[0, 1]` fraction onto `[-1, 1]`.
#[inline]
pub fn unit_to_ndc(f: f32) -> f32 {
    2.0 * f - 1.0
}

/// Maps `[-1, 1]` back onto a `[0, 1]` fraction.
#[inline]
pub fn ndc_to_unit(n: f32) -> f32 {
    (n + 1.0) / 2.0
}

/// Converts a pixel coordinate along an axis of length `extent` to NDC.
///
/// `extent` must be positive.
#[inline]
pub fn to_ndc(pixel: f32, extent: f32) -> f32 {
    debug_assert!(extent > 0.0, "to_ndc: non-positive extent {extent}");
    unit_to_ndc(pixel / extent)
}

/// Inverse of [`to_ndc`].
#[inline]
pub fn to_pixel(ndc: f32, extent: f32) -> f32 {
    ndc_to_unit(ndc) * extent
}
