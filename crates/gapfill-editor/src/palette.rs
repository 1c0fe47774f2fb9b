//! Named editor colors and their RGBA values

use gapfill_core::color;

/// Role of a color on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    /// Fillable canvas color
    Background,
    /// Color the fill stops at
    Barrier,
    /// Ink laid down by the brush
    Brush,
    /// Color written by the eraser
    Eraser,
}

/// Mapping from [`NamedColor`] to packed `0xRRGGBBAA` values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    background: u32,
    barrier: u32,
    brush: u32,
    eraser: u32,
}

impl Default for Palette {
    fn default() -> Self {
        let red = color::compose_rgb(255, 0, 0);
        Self {
            background: color::WHITE,
            barrier: red,
            brush: red,
            eraser: color::WHITE,
        }
    }
}

impl Palette {
    /// Packed value for `named`
    pub fn rgba(&self, named: NamedColor) -> u32 {
        match named {
            NamedColor::Background => self.background,
            NamedColor::Barrier => self.barrier,
            NamedColor::Brush => self.brush,
            NamedColor::Eraser => self.eraser,
        }
    }

    /// Replace the value for `named`
    pub fn with_color(mut self, named: NamedColor, value: u32) -> Self {
        match named {
            NamedColor::Background => self.background = value,
            NamedColor::Barrier => self.barrier = value,
            NamedColor::Brush => self.brush = value,
            NamedColor::Eraser => self.eraser = value,
        }
        self
    }

    /// Whether `pixel` shows `named`.
    ///
    /// Only the RGB channels are compared.
    pub fn matches(&self, named: NamedColor, pixel: u32) -> bool {
        (self.rgba(named) | 0xff) == (pixel | 0xff)
    }

    /// Whether brush ink is indistinguishable from the background.
    ///
    /// Such strokes are invisible and never stop a fill.
    pub fn brush_blends_in(&self) -> bool {
        self.matches(NamedColor::Background, self.brush)
    }
}
