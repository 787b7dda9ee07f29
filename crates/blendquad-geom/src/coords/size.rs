/// Pixel dimensions of a source texture.
///
/// Provided by whoever decoded the image; fixed for the lifetime of the quad
/// that samples it.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct TexSize {
    pub width: u32,
    pub height: u32,
}

impl TexSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Both extents are non-zero, so texcoords can be derived from it.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[inline]
    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }
}
