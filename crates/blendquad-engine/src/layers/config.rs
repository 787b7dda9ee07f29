use blendquad_geom::coords::Surface;

/// Construction parameters for a [`LayerStack`](super::LayerStack).
#[derive(Debug, Clone)]
pub struct StackConfig {
    /// Render-target size; display areas are clamped to it.
    pub surface: Surface,

    /// Upper bound on quads per layer.
    ///
    /// Layers grow on demand up to this count; further `add_entry` calls fail
    /// with `LayerError::LayerFull`.
    pub max_entries_per_layer: usize,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            surface: Surface::new(1280, 720),
            max_entries_per_layer: 20,
        }
    }
}
