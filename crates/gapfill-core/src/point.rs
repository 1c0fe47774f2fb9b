//! Seed coordinates
//!
//! Seeds are addressed as (row, column), matching how callers pick a
//! point on screen. Internally images are addressed as (x, y), so the
//! conversion helpers below swap the order.

/// A seed coordinate in (row, column) order.
///
/// Coordinates are signed so that out-of-range input from a caller can be
/// represented and rejected rather than wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeedPoint {
    row: i64,
    col: i64,
}

impl SeedPoint {
    /// Create a seed at (row, col).
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Create a seed from image (x, y) coordinates.
    pub fn from_xy(x: u32, y: u32) -> Self {
        Self {
            row: i64::from(y),
            col: i64::from(x),
        }
    }

    /// Row (y) coordinate.
    #[inline]
    pub fn row(&self) -> i64 {
        self.row
    }

    /// Column (x) coordinate.
    #[inline]
    pub fn col(&self) -> i64 {
        self.col
    }

    /// Seed shifted by (drow, dcol). The result may lie outside any image.
    pub fn offset(&self, drow: i64, dcol: i64) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Check whether the seed lies inside a `width` x `height` image.
    pub fn is_inside(&self, width: u32, height: u32) -> bool {
        self.row >= 0
            && self.col >= 0
            && self.row < i64::from(height)
            && self.col < i64::from(width)
    }

    /// Convert to image (x, y) coordinates if the seed lies inside a
    /// `width` x `height` image.
    pub fn to_xy(&self, width: u32, height: u32) -> Option<(u32, u32)> {
        if self.is_inside(width, height) {
            Some((self.col as u32, self.row as u32))
        } else {
            None
        }
    }
}

impl std::fmt::Display for SeedPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(row {}, col {})", self.row, self.col)
    }
}
