use tracing::debug;

use crate::surface::map_surface::{LayerHandle, MapSurface};

/// Every primitive currently drawn by a render pass.
///
/// Rendering is never incremental: a pass starts with [`LayerRegistry::clear_all`]
/// and tracks each primitive as soon as it is drawn.
#[derive(Debug, Default)]
pub struct LayerRegistry {
    layers: Vec<LayerHandle>,
}

impl LayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, layer: LayerHandle) {
        self.layers.push(layer);
    }

    /// Removes every tracked layer from the surface and forgets it.
    pub fn clear_all<M: MapSurface + ?Sized>(&mut self, surface: &mut M) {
        if !self.layers.is_empty() {
            debug!("LayerRegistry: removing {} layers", self.layers.len());
        }

        for layer in self.layers.drain(..) {
            surface.remove_layer(layer);
        }
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LayerHandle> {
        self.layers.iter()
    }
}

#[cfg(test)]
mod tests {
    use geo_types::Point;

    use crate::{surface::map_surface::MarkerOptions, test_utils::RecordingSurface};

    use super::*;

    #[test]
    fn test_clear_all_removes_tracked_layers() {
        let mut surface = RecordingSurface::default();
        let mut registry = LayerRegistry::new();

        for i in 0..3 {
            let handle = surface.add_marker(Point::new(i as f64, 0.0), MarkerOptions::default());
            registry.track(handle);
        }

        assert_eq!(registry.len(), 3);
        assert_eq!(surface.live_count(), 3);

        registry.clear_all(&mut surface);

        assert!(registry.is_empty());
        assert_eq!(surface.live_count(), 0);
        assert_eq!(surface.removed_count(), 3);
    }

    #[test]
    fn test_clear_all_is_idempotent() {
        let mut surface = RecordingSurface::default();
        let mut registry = LayerRegistry::new();

        let handle = surface.add_marker(Point::new(1.0, 1.0), MarkerOptions::default());
        registry.track(handle);

        registry.clear_all(&mut surface);
        registry.clear_all(&mut surface);

        assert!(registry.is_empty());
        assert_eq!(surface.live_count(), 0);
        assert_eq!(surface.removed_count(), 1);
    }

    #[test]
    fn test_untracked_layers_are_left_alone() {
        let mut surface = RecordingSurface::default();
        let mut registry = LayerRegistry::new();

        let _foreign = surface.add_marker(Point::new(5.0, 5.0), MarkerOptions::default());
        let owned = surface.add_marker(Point::new(1.0, 1.0), MarkerOptions::default());
        registry.track(owned);

        registry.clear_all(&mut surface);

        assert_eq!(surface.live_count(), 1);
    }
}
