//! Layered quad storage.
//!
//! Responsibilities:
//! - own every quad's display/clip rectangles, texture size and vertices
//! - clamp rectangles before they reach the geometry transforms
//! - provide deterministic paint order (layer id + insertion order)
//! - track which entries need their vertex buffers re-uploaded

mod config;
mod entry;
mod id;
mod stack;

pub use config::StackConfig;
pub use entry::QuadEntry;
pub use id::{EntryId, LayerId};
pub use stack::{DrawItem, LayerStack};
