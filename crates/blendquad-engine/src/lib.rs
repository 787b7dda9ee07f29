//! Layer bookkeeping for a multi-layer 2D texture compositor.
//!
//! Builds on `blendquad-geom`: this crate owns the per-layer quads, clamps
//! rectangles, tracks visibility, alpha and dirty state, and yields vertex
//! data in paint order. Uploading and drawing are left to the caller.

pub mod error;
pub mod layers;
pub mod logging;
pub mod pixels;

pub use error::{LayerError, PixelError};
pub use layers::{DrawItem, EntryId, LayerId, LayerStack, StackConfig};
