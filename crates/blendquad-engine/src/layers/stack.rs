use std::collections::BTreeMap;

use blendquad_geom::coords::{Point, PxRect, Surface, TexSize};
use blendquad_geom::quad::Quad;

use crate::error::LayerError;

use super::{EntryId, LayerId, QuadEntry, StackConfig};

#[derive(Debug, Clone)]
struct Layer {
    alpha: f32,
    entries: Vec<QuadEntry>,
}

impl Default for Layer {
    fn default() -> Self {
        Self { alpha: 1.0, entries: Vec::new() }
    }
}

/// A single paint-order item: which entry, its layer alpha, and its vertices.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawItem<'a> {
    pub id: EntryId,
    /// Layer alpha in `[0, 1]`; never 0 (hidden layers are skipped).
    pub alpha: f32,
    pub quad: &'a Quad,
}

/// Owned set of compositing layers, each an ordered list of textured quads.
///
/// Layers are created on demand and painted in ascending [`LayerId`] order;
/// entries within a layer paint in insertion order. Every operation that
/// changes an entry's vertices marks it dirty so the caller knows which
/// buffers to re-upload (see [`LayerStack::take_dirty`]).
///
/// ```
/// use blendquad_engine::layers::{LayerId, LayerStack, StackConfig};
/// use blendquad_geom::coords::{PxRect, TexSize};
///
/// let mut stack = LayerStack::new(StackConfig::default()).unwrap();
/// let bg = stack
///     .add_entry(LayerId(0), PxRect::new(0, 0, 1280, 720), TexSize::new(512, 512))
///     .unwrap();
/// stack.set_clip_area(bg, PxRect::new(0, 0, 256, 512)).unwrap();
///
/// for item in stack.iter_in_paint_order() {
///     let _bytes = item.quad.as_bytes(); // upload
/// }
/// ```
#[derive(Debug, Clone)]
pub struct LayerStack {
    config: StackConfig,
    layers: BTreeMap<LayerId, Layer>,
}

impl LayerStack {
    pub fn new(config: StackConfig) -> Result<Self, LayerError> {
        if !config.surface.is_valid() {
            return Err(LayerError::ZeroSurfaceExtent(config.surface));
        }
        if config.max_entries_per_layer == 0 {
            return Err(LayerError::ZeroCapacity);
        }
        log::debug!(
            "layer stack: surface {}x{}, {} entries per layer",
            config.surface.width,
            config.surface.height,
            config.max_entries_per_layer
        );
        Ok(Self { config, layers: BTreeMap::new() })
    }

    #[inline]
    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    #[inline]
    pub fn surface(&self) -> Surface {
        self.config.surface
    }

    /// Layer ids in paint order, including empty layers that only carry an alpha.
    pub fn layers(&self) -> impl Iterator<Item = LayerId> + '_ {
        self.layers.keys().copied()
    }

    /// Number of entries in `layer` (0 for a layer never touched).
    pub fn layer_len(&self, layer: LayerId) -> usize {
        self.layers.get(&layer).map_or(0, |l| l.entries.len())
    }

    /// Alpha of `layer`; 1.0 for a layer never touched.
    pub fn layer_alpha(&self, layer: LayerId) -> f32 {
        self.layers.get(&layer).map_or(1.0, |l| l.alpha)
    }

    pub fn entry(&self, id: EntryId) -> Option<&QuadEntry> {
        self.layers.get(&id.layer)?.entries.get(id.index)
    }

    fn entry_mut(&mut self, id: EntryId) -> Result<&mut QuadEntry, LayerError> {
        self.layers
            .get_mut(&id.layer)
            .and_then(|l| l.entries.get_mut(id.index))
            .ok_or(LayerError::UnknownEntry(id))
    }

    /// Appends a quad showing the whole of a `tex_size` texture over `display`.
    ///
    /// `display` is clamped to the surface first.
    pub fn add_entry(
        &mut self,
        layer: LayerId,
        display: PxRect,
        tex_size: TexSize,
    ) -> Result<EntryId, LayerError> {
        if !tex_size.is_valid() {
            return Err(LayerError::ZeroTextureExtent(tex_size));
        }

        let capacity = self.config.max_entries_per_layer;
        let surface = self.config.surface;
        let entries = &mut self.layers.entry(layer).or_default().entries;
        if entries.len() >= capacity {
            log::warn!("{layer} is full, {} entries", entries.len());
            return Err(LayerError::LayerFull { layer, capacity });
        }

        let display = clamp_logged(display, surface.width, surface.height);
        let id = EntryId::new(layer, entries.len());
        entries.push(QuadEntry::new(display, tex_size, surface));
        log::debug!(
            "added {id}: display {display:?}, texture {}x{}",
            tex_size.width,
            tex_size.height
        );
        Ok(id)
    }

    /// Moves an entry to `rect` (surface pixels). Returns the clamped rect.
    ///
    /// Positions are rebuilt from scratch, which discards any rotation.
    pub fn set_display_area(&mut self, id: EntryId, rect: PxRect) -> Result<PxRect, LayerError> {
        let surface = self.config.surface;
        let entry = self.entry_mut(id)?;
        let rect = clamp_logged(rect, surface.width, surface.height);
        entry.set_display(rect, surface);
        Ok(rect)
    }

    /// Samples `rect` (texture pixels) of the entry's texture. Returns the clamped rect.
    pub fn set_clip_area(&mut self, id: EntryId, rect: PxRect) -> Result<PxRect, LayerError> {
        let entry = self.entry_mut(id)?;
        let tex = entry.tex_size();
        let rect = clamp_logged(rect, tex.width, tex.height);
        entry.set_clip(rect);
        Ok(rect)
    }

    /// Rotates the entry's current positions about its own center.
    ///
    /// Compounds with earlier rotations; see [`Quad::rotate_about_center`].
    pub fn rotate_about_center(&mut self, id: EntryId, degrees: f32) -> Result<(), LayerError> {
        self.entry_mut(id)?.quad_mut().rotate_about_center(degrees);
        Ok(())
    }

    /// Shows the entry at its display area rotated by `degrees` about `pivot`
    /// (surface pixels). Absolute and idempotent.
    pub fn rotate_about_pivot(
        &mut self,
        id: EntryId,
        degrees: f32,
        pivot: Point,
    ) -> Result<(), LayerError> {
        let surface = self.config.surface;
        let entry = self.entry_mut(id)?;
        let display = entry.display();
        entry.quad_mut().rotate_about_pivot(display, surface, degrees, pivot);
        Ok(())
    }

    /// Rotates the entry's texture sampling by `degrees`, replacing its clip area UVs.
    pub fn rotate_texcoords(&mut self, id: EntryId, degrees: f32) -> Result<(), LayerError> {
        self.entry_mut(id)?.quad_mut().rotate_texcoords(degrees);
        Ok(())
    }

    /// Shows or hides a single entry. Hidden entries keep their vertex data.
    pub fn set_visible(&mut self, id: EntryId, visible: bool) -> Result<(), LayerError> {
        self.entry_mut(id)?.visible = visible;
        Ok(())
    }

    /// Sets a layer's alpha, clamped to `[0, 1]`. Zero hides the layer.
    pub fn set_layer_alpha(&mut self, layer: LayerId, alpha: f32) {
        let alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
        self.layers.entry(layer).or_default().alpha = alpha;
    }

    /// Switches to a new surface size.
    ///
    /// Every display area is re-clamped and every entry's positions rebuilt,
    /// which discards rotations. All entries come back dirty.
    pub fn resize(&mut self, surface: Surface) -> Result<(), LayerError> {
        if !surface.is_valid() {
            return Err(LayerError::ZeroSurfaceExtent(surface));
        }
        log::debug!(
            "resize {}x{} -> {}x{}",
            self.config.surface.width,
            self.config.surface.height,
            surface.width,
            surface.height
        );
        self.config.surface = surface;
        for entry in self.layers.values_mut().flat_map(|l| l.entries.iter_mut()) {
            let rect = clamp_logged(entry.display(), surface.width, surface.height);
            entry.set_display(rect, surface);
        }
        Ok(())
    }

    /// Entries whose vertices changed since the last call, in paint order.
    ///
    /// Clears the flags. Hidden entries are reported too, so their buffers
    /// are current when shown again.
    pub fn take_dirty(&mut self) -> Vec<EntryId> {
        let mut dirty = Vec::new();
        for (&layer, l) in self.layers.iter_mut() {
            for (index, entry) in l.entries.iter_mut().enumerate() {
                if entry.dirty {
                    entry.dirty = false;
                    dirty.push(EntryId::new(layer, index));
                }
            }
        }
        dirty
    }

    /// Visible entries of non-transparent layers, back to front.
    pub fn iter_in_paint_order(&self) -> impl Iterator<Item = DrawItem<'_>> {
        self.layers
            .iter()
            .filter(|(_, l)| l.alpha > 0.0)
            .flat_map(|(&layer, l)| {
                l.entries
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.visible)
                    .map(move |(index, e)| DrawItem {
                        id: EntryId::new(layer, index),
                        alpha: l.alpha,
                        quad: e.quad(),
                    })
            })
    }
}

fn clamp_logged(rect: PxRect, extent_w: u32, extent_h: u32) -> PxRect {
    let clamped = rect.clamped_to(extent_w, extent_h);
    if clamped != rect {
        log::trace!("clamped {rect:?} to {clamped:?} within {extent_w}x{extent_h}");
    }
    clamped
}
