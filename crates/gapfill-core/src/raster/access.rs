//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels.

use super::{Raster, RasterMut};
use crate::error::{Error, Result};

impl Raster {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the pixel buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[(y as usize) * (self.width() as usize) + x as usize]
    }
}

impl RasterMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[(y as usize) * (self.width() as usize) + x as usize]
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the pixel buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let idx = (y as usize) * (self.width() as usize) + x as usize;
        self.data_mut()[idx] = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_pixel() {
        let mut raster = Raster::new(5, 4).unwrap().to_mut();
        raster.set_pixel(4, 3, 42).unwrap();
        assert_eq!(raster.get_pixel(4, 3), Some(42));
        assert!(raster.set_pixel(5, 0, 1).is_err());
        assert!(raster.set_pixel(0, 4, 1).is_err());

        let raster: Raster = raster.into();
        assert_eq!(raster.get_pixel(4, 3), Some(42));
        assert_eq!(raster.get_pixel(0, 0), Some(0));
        assert_eq!(raster.get_pixel(0, 4), None);
    }
}
