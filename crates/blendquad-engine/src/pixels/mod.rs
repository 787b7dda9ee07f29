//! CPU-side patches to RGBA8 texture images.
//!
//! The caller owns the image bytes and the upload; these helpers only edit
//! pixels and report which sub-rectangle changed.

mod hole;

pub use hole::punch_alpha_hole;
