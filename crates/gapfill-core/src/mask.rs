//! Binary masks
//!
//! A [`Mask`] marks each pixel of an image as foreground or background.
//! The storage carries a one-cell margin on every side that is always
//! background, so neighbor lookups for any in-image pixel never leave the
//! buffer. Logical coordinates `(x, y)` run over `0..width` x `0..height`;
//! the margin is only reachable through the `*_padded` accessors.
//!
//! Masks are plain owned values. The set operations return new masks and
//! leave their inputs untouched.

use crate::error::{Error, Result};

/// Binary mask with a permanent background margin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    /// Row-major cells of the padded grid, `(width + 2) * (height + 2)`
    data: Vec<u8>,
}

impl Mask {
    /// Create an all-background mask of the given logical size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let size = (width as usize + 2) * (height as usize + 2);
        Ok(Mask {
            width,
            height,
            data: vec![0; size],
        })
    }

    /// Create a mask whose foreground is given by `f(x, y)`.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> bool,
    {
        let mut mask = Self::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                if f(x, y) {
                    mask.set_unchecked(x, y, true);
                }
            }
        }
        Ok(mask)
    }

    /// Create an all-background mask with the same size as `self`.
    pub fn create_template(&self) -> Self {
        Mask {
            width: self.width,
            height: self.height,
            data: vec![0; self.data.len()],
        }
    }

    /// Logical width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Logical height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width of the padded storage grid (`width + 2`).
    #[inline]
    pub fn padded_width(&self) -> u32 {
        self.width + 2
    }

    /// Height of the padded storage grid (`height + 2`).
    #[inline]
    pub fn padded_height(&self) -> u32 {
        self.height + 2
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize + 1) * (self.width as usize + 2) + x as usize + 1
    }

    /// Whether the pixel at logical (x, y) is foreground.
    ///
    /// Out-of-range coordinates read as background.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.data[self.index(x, y)] != 0
    }

    /// Read a pixel by signed logical coordinates; anything outside the
    /// image (margin included) reads as background.
    #[inline]
    pub fn get_signed(&self, x: i64, y: i64) -> bool {
        x >= 0
            && y >= 0
            && x < i64::from(self.width)
            && y < i64::from(self.height)
            && self.get(x as u32, y as u32)
    }

    /// Read a cell of the padded grid. `(0, 0)` is the top-left margin cell.
    ///
    /// # Panics
    ///
    /// Panics if `px >= padded_width` or `py >= padded_height`.
    #[inline]
    pub fn get_padded(&self, px: u32, py: u32) -> bool {
        assert!(px < self.padded_width() && py < self.padded_height());
        self.data[(py as usize) * (self.width as usize + 2) + px as usize] != 0
    }

    /// Set the pixel at logical (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if (x, y) is outside the image;
    /// the margin can never be written.
    pub fn set(&mut self, x: u32, y: u32, on: bool) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.set_unchecked(x, y, on);
        Ok(())
    }

    /// Set the pixel at logical (x, y) without bounds checking.
    ///
    /// The caller must guarantee `x < width` and `y < height`; otherwise a
    /// margin cell may be overwritten or the call panics.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, on: bool) {
        let idx = self.index(x, y);
        self.data[idx] = u8::from(on);
    }

    /// Number of foreground pixels.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Whether the mask has no foreground pixel.
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|&v| v == 0)
    }

    /// Iterate over foreground pixels as logical `(x, y)`, row by row.
    pub fn foreground(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let w = self.width;
        (0..self.height).flat_map(move |y| {
            (0..w)
                .filter(move |&x| self.get(x, y))
                .map(move |x| (x, y))
        })
    }

    /// Whether any foreground pixel lies on the first or last row or column
    /// of the image.
    pub fn touches_border(&self) -> bool {
        let (w, h) = (self.width, self.height);
        (0..w).any(|x| self.get(x, 0) || self.get(x, h - 1))
            || (0..h).any(|y| self.get(0, y) || self.get(w - 1, y))
    }

    /// Whether every margin cell is background.
    pub fn margin_is_clear(&self) -> bool {
        let (pw, ph) = (self.padded_width(), self.padded_height());
        (0..pw).all(|px| !self.get_padded(px, 0) && !self.get_padded(px, ph - 1))
            && (0..ph).all(|py| !self.get_padded(0, py) && !self.get_padded(pw - 1, py))
    }

    fn check_same_size(&self, other: &Mask) -> Result<()> {
        if self.width != other.width || self.height != other.height {
            return Err(Error::DimensionMismatch {
                expected: (self.width, self.height),
                actual: (other.width, other.height),
            });
        }
        Ok(())
    }

    /// Set difference `self − other`: foreground where `self` is set and
    /// `other` is not.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the sizes differ.
    pub fn subtract(&self, other: &Mask) -> Result<Mask> {
        self.check_same_size(other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| u8::from(a != 0 && b == 0))
            .collect();
        Ok(Mask {
            width: self.width,
            height: self.height,
            data,
        })
    }

    /// Set union `self ∪ other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the sizes differ.
    pub fn union(&self, other: &Mask) -> Result<Mask> {
        self.check_same_size(other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| u8::from(a != 0 || b != 0))
            .collect();
        Ok(Mask {
            width: self.width,
            height: self.height,
            data,
        })
    }

    /// Whether every foreground pixel of `self` is also foreground in
    /// `other`. Masks of different sizes are never subsets of each other.
    pub fn is_subset_of(&self, other: &Mask) -> bool {
        self.check_same_size(other).is_ok()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| a == 0 || b != 0)
    }

    /// Logical pixels as a row-major gray buffer: foreground `on`,
    /// background `off`.
    pub fn to_gray_bytes(&self, on: u8, off: u8) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.width as usize * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(if self.get(x, y) { on } else { off });
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(w: u32, h: u32, x0: u32, y0: u32, x1: u32, y1: u32) -> Mask {
        Mask::from_fn(w, h, |x, y| x >= x0 && x < x1 && y >= y0 && y < y1).unwrap()
    }

    #[test]
    fn test_new_is_background() {
        let mask = Mask::new(7, 3).unwrap();
        assert_eq!(mask.count(), 0);
        assert!(mask.is_empty());
        assert_eq!(mask.padded_width(), 9);
        assert_eq!(mask.padded_height(), 5);
        assert!(Mask::new(0, 3).is_err());
    }

    #[test]
    fn test_set_and_get() {
        let mut mask = Mask::new(4, 4).unwrap();
        mask.set(3, 3, true).unwrap();
        assert!(mask.get(3, 3));
        assert!(mask.get_padded(4, 4));
        assert!(!mask.get(4, 3));
        assert!(!mask.get_signed(-1, 0));
        assert!(mask.set(4, 0, true).is_err());
        mask.set(3, 3, false).unwrap();
        assert!(mask.is_empty());
    }

    #[test]
    fn test_full_mask_keeps_margin_clear() {
        let mask = Mask::from_fn(5, 5, |_, _| true).unwrap();
        assert_eq!(mask.count(), 25);
        assert!(mask.margin_is_clear());
        assert!(mask.touches_border());
    }

    #[test]
    fn test_subtract_and_union() {
        let a = square(10, 10, 0, 0, 6, 6);
        let b = square(10, 10, 3, 3, 9, 9);
        let diff = a.subtract(&b).unwrap();
        assert_eq!(diff.count(), 36 - 9);
        assert!(diff.get(0, 0));
        assert!(!diff.get(4, 4));

        let both = a.union(&b).unwrap();
        assert_eq!(both.count(), 36 + 36 - 9);
        assert!(a.is_subset_of(&both));
        assert!(!both.is_subset_of(&a));
    }

    #[test]
    fn test_size_mismatch() {
        let a = Mask::new(4, 4).unwrap();
        let b = Mask::new(4, 5).unwrap();
        assert!(matches!(
            a.subtract(&b),
            Err(Error::DimensionMismatch { .. })
        ));
        assert!(!a.is_subset_of(&b));
    }

    #[test]
    fn test_touches_border() {
        assert!(!square(10, 10, 2, 2, 8, 8).touches_border());
        assert!(square(10, 10, 2, 2, 10, 8).touches_border());
    }

    #[test]
    fn test_foreground_iter_and_gray_bytes() {
        let mask = square(3, 2, 1, 0, 3, 1);
        let pts: Vec<_> = mask.foreground().collect();
        assert_eq!(pts, vec![(1, 0), (2, 0)]);
        assert_eq!(mask.to_gray_bytes(255, 0), vec![0, 255, 255, 0, 0, 0]);
    }
}
