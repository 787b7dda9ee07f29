/// Axis-aligned rectangle in integer pixels (top-left origin).
///
/// Used for display areas (surface pixel space) and clip areas (texture pixel
/// space). Out-of-range values are clamped via [`PxRect::clamped_to`], never
/// rejected.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct PxRect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl PxRect {
    #[inline]
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, width, height }
    }

    /// Rectangle covering a whole `width × height` extent.
    #[inline]
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, saturate(width), saturate(height))
    }

    #[inline]
    pub fn right(self) -> i32 {
        self.left.saturating_add(self.width)
    }

    #[inline]
    pub fn bottom(self) -> i32 {
        self.top.saturating_add(self.height)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Clamps the rectangle into `[0, extent_w] × [0, extent_h]`.
    ///
    /// Afterwards `left, top, width, height >= 0`, `right() <= extent_w` and
    /// `bottom() <= extent_h`. A rect starting past the extent collapses to
    /// zero size at the far edge.
    pub fn clamped_to(self, extent_w: u32, extent_h: u32) -> Self {
        let (left, width) = clamp_span(self.left, self.width, saturate(extent_w));
        let (top, height) = clamp_span(self.top, self.height, saturate(extent_h));
        Self { left, top, width, height }
    }
}

#[inline]
fn saturate(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

fn clamp_span(start: i32, len: i32, extent: i32) -> (i32, i32) {
    let start = start.clamp(0, extent);
    let len = len.max(0).min(extent - start);
    (start, len)
}
