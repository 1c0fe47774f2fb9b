//! Layer compositing
//!
//! Layers are painted over a background raster in ascending
//! [`LayerKind`](crate::LayerKind) order, whatever order they were added
//! in. Unpainted cells let the layers below show through.

use crate::error::{EditorError, EditorResult};
use crate::layer::Layer;
use crate::palette::Palette;
use gapfill_core::Raster;

/// Paints layers over a background
#[derive(Debug)]
pub struct Compositor<'a> {
    palette: &'a Palette,
    layers: Vec<&'a Layer>,
}

impl<'a> Compositor<'a> {
    /// Create a compositor resolving colors through `palette`
    pub fn new(palette: &'a Palette) -> Self {
        Self {
            palette,
            layers: Vec::new(),
        }
    }

    /// Add a layer
    pub fn with_layer(mut self, layer: &'a Layer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Number of layers added
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Composite all layers over `background`
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::LayerMismatch`] if a layer's size differs
    /// from the background.
    pub fn compose(&self, background: &Raster) -> EditorResult<Raster> {
        let (w, h) = (background.width(), background.height());
        for layer in &self.layers {
            if layer.width() != w || layer.height() != h {
                return Err(EditorError::LayerMismatch {
                    expected_w: w,
                    expected_h: h,
                    actual_w: layer.width(),
                    actual_h: layer.height(),
                });
            }
        }

        let mut ordered = self.layers.clone();
        ordered.sort_by_key(|layer| layer.kind());

        let mut out = background.to_mut();
        for layer in ordered {
            for (x, y, named) in layer.painted() {
                out.set_pixel_unchecked(x, y, self.palette.rgba(named));
            }
        }
        Ok(out.into())
    }
}
