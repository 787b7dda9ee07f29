use core::cmp::Ordering;
use std::fmt;

/// Compositing layer identifier.
///
/// Lower values are painted first (further back).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct LayerId(pub u32);

impl Ord for LayerId {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for LayerId {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer {}", self.0)
    }
}

/// Handle to a quad entry: its layer plus insertion index within that layer.
///
/// Ordering rules match paint order:
/// 1) `layer`: ascending (back-to-front)
/// 2) `index`: ascending (insertion order within the layer)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct EntryId {
    pub layer: LayerId,
    pub index: usize,
}

impl EntryId {
    #[inline]
    pub const fn new(layer: LayerId, index: usize) -> Self {
        Self { layer, index }
    }
}

impl Ord for EntryId {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match self.layer.cmp(&other.layer) {
            Ordering::Equal => self.index.cmp(&other.index),
            o => o,
        }
    }
}

impl PartialOrd for EntryId {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} entry {}", self.layer, self.index)
    }
}
