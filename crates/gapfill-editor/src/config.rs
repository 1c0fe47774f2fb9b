//! Editor configuration

use crate::error::{EditorError, EditorResult};
use crate::palette::Palette;
use gapfill_region::DEFAULT_GAP_WIDTH;
use std::path::PathBuf;

/// Settings for an [`Editor`](crate::Editor) session
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Initial brush radius
    pub brush_radius: u32,
    /// Amount the brush grows or shrinks per command
    pub brush_step: u32,
    /// Smallest brush radius
    pub min_brush_radius: u32,
    /// Gap width handed to the fill
    pub gap_width: u32,
    /// Canvas colors
    pub palette: Palette,
    /// Where the filled stencil is written, if anywhere
    pub save_path: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 150,
            brush_radius: 4,
            brush_step: 2,
            min_brush_radius: 2,
            gap_width: DEFAULT_GAP_WIDTH,
            palette: Palette::default(),
            save_path: None,
        }
    }
}

impl EditorConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_brush_radius(mut self, radius: u32) -> Self {
        self.brush_radius = radius;
        self
    }

    pub fn with_brush_step(mut self, step: u32) -> Self {
        self.brush_step = step;
        self
    }

    pub fn with_min_brush_radius(mut self, radius: u32) -> Self {
        self.min_brush_radius = radius;
        self
    }

    pub fn with_gap_width(mut self, gap_width: u32) -> Self {
        self.gap_width = gap_width;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = Some(path.into());
        self
    }

    /// Check the settings are usable
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidConfig`] for an empty canvas or a
    /// zero brush floor.
    pub fn validate(&self) -> EditorResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(EditorError::InvalidConfig(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.min_brush_radius == 0 {
            return Err(EditorError::InvalidConfig(
                "minimum brush radius must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!((config.width, config.height), (200, 150));
        assert_eq!(config.brush_radius, 4);
        assert_eq!(config.gap_width, 10);
        assert!(config.save_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert!(EditorConfig::default().with_size(0, 10).validate().is_err());
        assert!(
            EditorConfig::default()
                .with_min_brush_radius(0)
                .validate()
                .is_err()
        );
    }
}
