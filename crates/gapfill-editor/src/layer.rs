//! Paint layers holding typed colors

use crate::palette::NamedColor;
use gapfill_core::filled_disk_offsets;

/// Layer identity, ordered by z (bottom first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LayerKind {
    /// Eraser strokes
    Erase,
    /// Brush strokes
    Ink,
    /// Ephemeral brush outline under the pointer
    Preview,
}

/// A sparse paint layer
///
/// Each cell is either unpainted (`None`) or holds the [`NamedColor`]
/// that was stamped there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    kind: LayerKind,
    width: u32,
    height: u32,
    cells: Vec<Option<NamedColor>>,
}

impl Layer {
    /// Create an unpainted layer
    pub fn new(kind: LayerKind, width: u32, height: u32) -> Self {
        Self {
            kind,
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Layer identity
    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Cell at (x, y); `None` when unpainted or out of bounds
    pub fn get(&self, x: u32, y: u32) -> Option<NamedColor> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[self.index(x, y)]
    }

    /// Painted cells in raster order
    pub fn painted(&self) -> impl Iterator<Item = (u32, u32, NamedColor)> + '_ {
        let w = self.width as usize;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|named| ((i % w) as u32, (i / w) as u32, named))
        })
    }

    /// Number of painted cells
    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Stamp a filled disk of `color` centered at (cx, cy), clipped to the
    /// layer. Returns the number of cells written.
    pub fn stamp_disk(&mut self, cx: i32, cy: i32, radius: u32, color: NamedColor) -> usize {
        self.write_disk(cx, cy, radius, Some(color))
    }

    /// Unpaint a filled disk centered at (cx, cy)
    pub fn clear_disk(&mut self, cx: i32, cy: i32, radius: u32) -> usize {
        self.write_disk(cx, cy, radius, None)
    }

    /// Unpaint every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    fn write_disk(&mut self, cx: i32, cy: i32, radius: u32, value: Option<NamedColor>) -> usize {
        let mut written = 0;
        for (dx, dy) in filled_disk_offsets(radius) {
            let x = cx as i64 + dx as i64;
            let y = cy as i64 + dy as i64;
            if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
                continue;
            }
            let idx = self.index(x as u32, y as u32);
            self.cells[idx] = value;
            written += 1;
        }
        written
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
