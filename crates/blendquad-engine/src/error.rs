use std::fmt;

use blendquad_geom::coords::{Surface, TexSize};

use crate::layers::{EntryId, LayerId};

/// Failure of a [`LayerStack`](crate::layers::LayerStack) operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerError {
    /// The layer already holds `capacity` entries.
    LayerFull { layer: LayerId, capacity: usize },
    /// No entry exists for this id.
    UnknownEntry(EntryId),
    /// Texture with a zero width or height; texcoords cannot be derived.
    ZeroTextureExtent(TexSize),
    /// Render surface with a zero width or height; NDC cannot be derived.
    ZeroSurfaceExtent(Surface),
    /// `max_entries_per_layer` of zero.
    ZeroCapacity,
}

impl fmt::Display for LayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LayerFull { layer, capacity } => {
                write!(f, "{layer} is full ({capacity} entries)")
            }
            Self::UnknownEntry(id) => write!(f, "no quad at {id}"),
            Self::ZeroTextureExtent(s) => {
                write!(f, "texture size {}x{} has a zero extent", s.width, s.height)
            }
            Self::ZeroSurfaceExtent(s) => {
                write!(f, "surface size {}x{} has a zero extent", s.width, s.height)
            }
            Self::ZeroCapacity => write!(f, "max entries per layer must be at least 1"),
        }
    }
}

impl std::error::Error for LayerError {}

/// Failure of a pixel-buffer patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelError {
    /// Buffer length does not match `width * height * 4`.
    BufferSize { expected: usize, actual: usize },
}

impl fmt::Display for PixelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferSize { expected, actual } => {
                write!(f, "RGBA buffer holds {actual} bytes, expected {expected}")
            }
        }
    }
}

impl std::error::Error for PixelError {}
